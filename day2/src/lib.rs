use std::{ops::Add, str::FromStr};

use common::{Error, Result, Vec2d};

/// Horizontal movement in `x`, depth change in `y` (positive is down).
pub type Direction = Vec2d<i32>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Command(pub Direction);

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::malformed(format!("invalid direction string '{}'", s));

        let (command, distance) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let distance: i32 = distance.trim().parse().map_err(|_| invalid())?;

        let direction = match command {
            "forward" => Direction::new(distance, 0),
            "up" => Direction::new(0, -distance),
            "down" => Direction::new(0, distance),
            _ => return Err(invalid()),
        };

        Ok(Command(direction))
    }
}

pub fn parse_directions(data: &str) -> Result<Vec<Direction>> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse::<Command>().map(|command| command.0))
        .collect()
}

/// Position reached by applying each direction literally.
pub fn net_direction(directions: impl IntoIterator<Item = Direction>) -> Direction {
    directions
        .into_iter()
        .fold(Direction::default(), |position, step| position + step)
}

/// Submarine state when `up`/`down` steer the aim instead of the depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aiming {
    pub x: i32,
    pub aim: i32,
    pub depth: i32,
}

impl Aiming {
    pub fn to_direction(self) -> Direction {
        Direction::new(self.x, self.depth)
    }
}

impl Add<Direction> for Aiming {
    type Output = Self;

    fn add(self, d: Direction) -> Self::Output {
        let aim = self.aim + d.y;
        Self {
            x: self.x + d.x,
            aim,
            depth: self.depth + d.x * aim,
        }
    }
}

pub fn net_aiming(directions: impl IntoIterator<Item = Direction>) -> Direction {
    directions
        .into_iter()
        .fold(Aiming::default(), |aiming, step| aiming + step)
        .to_direction()
}
