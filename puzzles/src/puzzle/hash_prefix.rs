use anyhow::{Context, anyhow};
use tracing::info;

use crate::core::hash_search::HashSearcher;
use crate::io::config::HashConfig;
use crate::puzzle::{PartOutput, Puzzle, PuzzleId};

#[derive(Debug)]
pub struct HashPrefixFinder {
    id: PuzzleId,
    difficulties: Vec<usize>,
    max_iterations: Option<u64>,
    searcher: Option<HashSearcher>,
}

impl HashPrefixFinder {
    pub fn new(id: PuzzleId, config: &HashConfig) -> Self {
        Self {
            id,
            difficulties: config.difficulties.clone(),
            max_iterations: config.max_iterations,
            searcher: None,
        }
    }

    /// Searcher for `seed`, replaced when the seed changes between parts.
    fn searcher(&mut self, seed: &str) -> &mut HashSearcher {
        let max_iterations = self.max_iterations;
        let searcher = self
            .searcher
            .get_or_insert_with(|| HashSearcher::new(seed, max_iterations));
        if searcher.seed() != seed {
            *searcher = HashSearcher::new(seed, max_iterations);
        }
        searcher
    }

    fn solve_part(&mut self, part: usize, seed: &str) -> PartOutput {
        let difficulty = *self
            .difficulties
            .get(part - 1)
            .ok_or_else(|| anyhow!("no difficulty configured for part {part}"))?;
        let k = self
            .searcher(seed)
            .find(difficulty)
            .with_context(|| format!("search difficulty {difficulty}"))?;
        info!(part, difficulty, k, "hash prefix found");
        Ok(vec![k.to_string()])
    }
}

impl Puzzle for HashPrefixFinder {
    fn id(&self) -> PuzzleId {
        self.id
    }

    fn name(&self) -> &'static str {
        "Hash Prefix Finder"
    }

    fn part1(&mut self, input: &str) -> PartOutput {
        self.solve_part(1, input)
    }

    fn part2(&mut self, input: &str) -> PartOutput {
        self.solve_part(2, input)
    }

    fn reports_elapsed(&self) -> bool {
        true
    }
}
