use std::{fmt::Display, str::FromStr};

use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::{Error, Vec2d};

/// A segment between two grid points, written `x1,y1 -> x2,y2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Line2d<T> {
    pub start: Vec2d<T>,
    pub finish: Vec2d<T>,
}

impl<T: Display> Display for Line2d<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.finish)
    }
}

fn coordinate<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, |value: &str| value.parse())(input)
}

fn point<T: FromStr>(input: &str) -> IResult<&str, Vec2d<T>> {
    map(
        separated_pair(coordinate, char(','), coordinate),
        |(x, y)| Vec2d { x, y },
    )(input)
}

fn line<T: FromStr>(input: &str) -> IResult<&str, Line2d<T>> {
    map(
        separated_pair(point, delimited(space0, tag("->"), space0), point),
        |(start, finish)| Line2d { start, finish },
    )(input)
}

impl<T: FromStr> FromStr for Line2d<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(line::<T>)(s.trim())
            .map(|(_, parsed)| parsed)
            .map_err(|_| Error::malformed(format!("invalid line segment '{}'", s)))
    }
}
