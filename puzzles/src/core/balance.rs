//! Running-sum counter over a sequence of "up" and "down" symbols.

use serde::{Deserialize, Serialize};

/// How characters other than the two recognized symbols are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPolicy {
    /// Reject the input with [`BalanceError::InvalidSymbol`].
    #[default]
    Strict,
    /// Skip the character. It still occupies a position.
    Ignore,
    /// Count every non-up character as down.
    Down,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("unexpected symbol {symbol:?} at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
}

/// Symbol pair and classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub up: char,
    pub down: char,
    pub policy: SymbolPolicy,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            up: '(',
            down: ')',
            policy: SymbolPolicy::Strict,
        }
    }
}

impl Balance {
    pub fn with_policy(policy: SymbolPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Contribution of the symbol at 1-based `position`.
    fn step(&self, position: usize, symbol: char) -> Result<i64, BalanceError> {
        if symbol == self.up {
            return Ok(1);
        }
        if symbol == self.down {
            return Ok(-1);
        }
        match self.policy {
            SymbolPolicy::Strict => Err(BalanceError::InvalidSymbol { position, symbol }),
            SymbolPolicy::Ignore => Ok(0),
            SymbolPolicy::Down => Ok(-1),
        }
    }

    /// Running sums after each symbol, paired with their 1-based position.
    pub fn running_sums<'a>(
        &'a self,
        input: &'a str,
    ) -> impl Iterator<Item = Result<(usize, i64), BalanceError>> + 'a {
        input
            .chars()
            .enumerate()
            .scan(0i64, move |total, (idx, symbol)| {
                let position = idx + 1;
                Some(self.step(position, symbol).map(|delta| {
                    *total += delta;
                    (position, *total)
                }))
            })
    }

    /// Count of up symbols minus count of down symbols.
    pub fn net_sum(&self, input: &str) -> Result<i64, BalanceError> {
        let mut last = 0;
        for item in self.running_sums(input) {
            let (_, total) = item?;
            last = total;
        }
        Ok(last)
    }

    /// 1-based position of the first prefix whose running sum equals `target`.
    ///
    /// Returns `None` when the sum never reaches `target`. In strict mode,
    /// symbols after the match are not inspected.
    pub fn first_position(&self, input: &str, target: i64) -> Result<Option<usize>, BalanceError> {
        for item in self.running_sums(input) {
            let (position, total) = item?;
            if total == target {
                return Ok(Some(position));
            }
        }
        Ok(None)
    }
}
