use anyhow::Context;

use crate::core::balance::Balance;
use crate::puzzle::{PartOutput, Puzzle, PuzzleId};

/// Running sum at which part 2 stops.
const TARGET_SUM: i64 = -1;

#[derive(Debug)]
pub struct BalanceCounter {
    id: PuzzleId,
    balance: Balance,
}

impl BalanceCounter {
    pub fn new(id: PuzzleId, balance: Balance) -> Self {
        Self { id, balance }
    }
}

impl Puzzle for BalanceCounter {
    fn id(&self) -> PuzzleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Balance Counter"
    }

    fn part1(&mut self, input: &str) -> PartOutput {
        let sum = self.balance.net_sum(input).context("net sum")?;
        Ok(vec![sum.to_string()])
    }

    fn part2(&mut self, input: &str) -> PartOutput {
        let position = self
            .balance
            .first_position(input, TARGET_SUM)
            .context("first negative position")?;
        Ok(vec![position.map_or_else(|| "none".to_string(), |p| p.to_string())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::{BalanceError, SymbolPolicy};

    fn counter(policy: SymbolPolicy) -> BalanceCounter {
        let id = PuzzleId::new(1).expect("day");
        BalanceCounter::new(id, Balance::with_policy(policy))
    }

    #[test]
    fn answers_both_parts() {
        let mut puzzle = counter(SymbolPolicy::Strict);
        assert_eq!(puzzle.part1("()())").expect("part 1"), vec!["-1"]);
        assert_eq!(puzzle.part2("()())").expect("part 2"), vec!["5"]);
    }

    #[test]
    fn never_negative_reports_none() {
        let mut puzzle = counter(SymbolPolicy::Strict);
        assert_eq!(puzzle.part2("(())").expect("part 2"), vec!["none"]);
    }

    #[test]
    fn strict_error_is_typed() {
        let mut puzzle = counter(SymbolPolicy::Strict);
        let err = puzzle.part1("(?").expect_err("strict");
        assert_eq!(
            err.downcast_ref::<BalanceError>(),
            Some(&BalanceError::InvalidSymbol {
                position: 2,
                symbol: '?'
            })
        );
    }
}
