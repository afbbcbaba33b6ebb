use std::collections::HashSet;

use common::{split, Error, Result, SplitBehaviour};

/// Source of the numbers called out during a game.
///
/// `draws` always yields the whole sequence from the start, so a game can be replayed.
pub trait NumberDrawer: Default {
    fn load(&mut self, data: &str) -> Result<()>;

    fn draws(&self) -> &[u32];
}

/// Draws read from a comma-separated line such as `7,4,9,5`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextNumberDrawer {
    draws: Vec<u32>,
}

impl NumberDrawer for TextNumberDrawer {
    fn load(&mut self, data: &str) -> Result<()> {
        self.draws.clear();

        let mut seen = HashSet::new();
        let mut draws = Vec::new();
        for token in split(data.trim(), ',', SplitBehaviour::DropEmpty) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let number: u32 = token
                .parse()
                .map_err(|_| Error::malformed(format!("invalid draw '{}'", token)))?;
            if !seen.insert(number) {
                return Err(Error::malformed(format!("number {} is drawn twice", number)));
            }
            draws.push(number);
        }

        tracing::debug!(draws = draws.len(), "loaded draw sequence");
        self.draws = draws;
        Ok(())
    }

    fn draws(&self) -> &[u32] {
        &self.draws
    }
}

impl<'a> IntoIterator for &'a TextNumberDrawer {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.draws.iter()
    }
}
