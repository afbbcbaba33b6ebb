use common::{Error, Result};

/// Counts how often the sum of a `WINDOW`-wide sliding window grows from one position to the next.
///
/// Two neighbouring windows share all but one measurement, so comparing their sums is the same as
/// comparing the measurement entering the window against the one leaving it.
pub fn depth_score<const WINDOW: usize>(measurements: &[u32]) -> usize {
    assert!(WINDOW > 0);

    measurements
        .iter()
        .zip(measurements.iter().skip(WINDOW))
        .filter(|(leaving, entering)| entering > leaving)
        .count()
}

pub fn parse_measurements(data: &str) -> Result<Vec<u32>> {
    data.split_ascii_whitespace()
        .map(|value| {
            value
                .parse()
                .map_err(|_| Error::malformed(format!("invalid depth measurement '{}'", value)))
        })
        .collect()
}
