use std::cmp::Ordering;

use bitvec::prelude::*;
use common::{Error, Result};

pub const DEFAULT_ENTRY_WIDTH: usize = 12;

/// One diagnostic reading, most significant bit first.
pub type Entry = BitVec<u32, Msb0>;

#[derive(Clone, Debug)]
pub struct DiagnosticLog {
    width: usize,
    entries: Vec<Entry>,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_width(DEFAULT_ENTRY_WIDTH)
    }
}

impl DiagnosticLog {
    pub fn with_width(width: usize) -> Self {
        assert!(width > 0 && width <= u32::BITS as usize, "unsupported entry width {}", width);
        Self {
            width,
            entries: Vec::new(),
        }
    }

    /// Replaces the log contents with one entry per whitespace-separated token.
    ///
    /// A malformed token leaves the log empty.
    pub fn load(&mut self, data: &str) -> Result<&mut Self> {
        self.entries.clear();

        let entries = data
            .split_ascii_whitespace()
            .map(|token| parse_entry(token, self.width))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(entries = entries.len(), width = self.width, "loaded diagnostic log");
        self.entries = entries;
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn most_frequent_bits(&self) -> Entry {
        most_frequent_bits(&self.entries, self.width)
    }

    pub fn least_frequent_bits(&self) -> Entry {
        !self.most_frequent_bits()
    }

    /// Gamma rate times epsilon rate.
    pub fn power_consumption(&self) -> Result<u64> {
        if self.is_empty() {
            return Err(Error::EmptyLog);
        }

        let most_frequent = self.most_frequent_bits();
        let gamma = entry_as_u32(&most_frequent);
        let epsilon = flipped_entry_as_u32(&most_frequent);
        tracing::debug!(gamma, epsilon, "computed power parameters");

        Ok(u64::from(gamma) * u64::from(epsilon))
    }

    pub fn life_support_rating(&self) -> Result<u64> {
        LifeSupport::new(self).rating()
    }
}

fn parse_entry(token: &str, width: usize) -> Result<Entry> {
    if token.len() != width {
        return Err(Error::malformed(format!("invalid log entry: {}", token)));
    }

    token
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(Error::malformed(format!("invalid character in log line: {}", c))),
        })
        .collect()
}

/// Per position, `1` if at least half of the entries have a `1` there.
fn most_frequent_bits<'a>(entries: impl IntoIterator<Item = &'a Entry>, width: usize) -> Entry {
    let mut balance = vec![0i64; width];
    for entry in entries {
        for (count, bit) in balance.iter_mut().zip(entry.iter()) {
            *count += if *bit { 1 } else { -1 };
        }
    }

    balance.into_iter().map(|count| count >= 0).collect()
}

pub fn entry_as_u32(entry: &BitSlice<u32, Msb0>) -> u32 {
    entry
        .iter()
        .fold(0u32, |value, bit| (value << 1) | u32::from(*bit))
}

pub fn flipped_entry_as_u32(entry: &BitSlice<u32, Msb0>) -> u32 {
    entry
        .iter()
        .fold(0u32, |value, bit| (value << 1) | u32::from(!*bit))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BitCriteria {
    MostCommon,
    LeastCommon,
}

impl BitCriteria {
    fn select(self, ones: usize, zeros: usize) -> bool {
        match self {
            BitCriteria::MostCommon => match ones.cmp(&zeros) {
                Ordering::Less => false,
                Ordering::Equal | Ordering::Greater => true,
            },
            // Never pick a bit value that no remaining entry has.
            BitCriteria::LeastCommon => {
                if ones == 0 {
                    false
                } else if zeros == 0 {
                    true
                } else {
                    ones < zeros
                }
            }
        }
    }
}

/// Narrows the log down to a single entry one bit position at a time.
pub struct LifeSupport<'a> {
    log: &'a DiagnosticLog,
}

impl<'a> LifeSupport<'a> {
    pub fn new(log: &'a DiagnosticLog) -> Self {
        Self { log }
    }

    fn filter_bits_matching(&self, criteria: BitCriteria) -> Result<u32> {
        let mut candidates: Vec<&Entry> = self.log.iter().collect();
        if candidates.is_empty() {
            return Err(Error::EmptyLog);
        }

        for index in 0..self.log.width() {
            if candidates.len() <= 1 {
                break;
            }

            let ones = candidates.iter().filter(|entry| entry[index]).count();
            let zeros = candidates.len() - ones;
            let keep = criteria.select(ones, zeros);

            candidates.retain(|entry| entry[index] == keep);
            tracing::trace!(?criteria, index, remaining = candidates.len(), "filtered candidates");
        }

        Ok(entry_as_u32(candidates[0]))
    }

    pub fn filter_using_most_frequent_bits(&self) -> Result<u32> {
        self.filter_bits_matching(BitCriteria::MostCommon)
    }

    pub fn filter_using_least_frequent_bits(&self) -> Result<u32> {
        self.filter_bits_matching(BitCriteria::LeastCommon)
    }

    /// Oxygen generator rating times CO2 scrubber rating.
    pub fn rating(&self) -> Result<u64> {
        let oxygen = self.filter_using_most_frequent_bits()?;
        let co2 = self.filter_using_least_frequent_bits()?;
        tracing::debug!(oxygen, co2, "computed life support ratings");

        Ok(u64::from(oxygen) * u64::from(co2))
    }
}
