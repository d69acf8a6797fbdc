//! Brute-force search for the smallest integer whose salted MD5 digest
//! starts with a run of zero hex digits.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

/// Hex digits in an MD5 digest.
pub const MAX_DIFFICULTY: usize = 32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("difficulty {difficulty} exceeds the 32 hex digits of a digest")]
    DifficultyTooHigh { difficulty: usize },
    /// `examined` counts the candidates hashed by the failed search, from
    /// its own starting point.
    #[error("no digest with {difficulty} leading zeros within {examined} candidates")]
    Exhausted { difficulty: usize, examined: u64 },
}

/// Raw digest of `seed` followed by the decimal form of `k`.
pub fn digest(seed: &str, k: u64) -> [u8; 16] {
    md5::compute(format!("{seed}{k}")).into()
}

/// Lowercase hex digest of `seed` followed by the decimal form of `k`.
pub fn digest_hex(seed: &str, k: u64) -> String {
    hex::encode(digest(seed, k))
}

/// True if the hex form of `digest` starts with `difficulty` zeros.
///
/// Works on the raw bytes: two hex digits per byte, high nibble first.
pub fn has_zero_prefix(digest: &[u8; 16], difficulty: usize) -> bool {
    if difficulty > MAX_DIFFICULTY {
        return false;
    }
    let full = difficulty / 2;
    if digest[..full].iter().any(|&b| b != 0) {
        return false;
    }
    difficulty % 2 == 0 || digest[full] >> 4 == 0
}

/// Smallest `k >= 1` whose digest has `difficulty` leading zeros.
pub fn find_hash_integer(
    seed: &str,
    difficulty: usize,
    max_iterations: Option<u64>,
) -> Result<u64, SearchError> {
    find_from(seed, difficulty, 1, max_iterations)
}

/// Smallest `k >= start` whose digest has `difficulty` leading zeros.
///
/// `max_iterations` caps the number of candidates hashed.
#[instrument(level = "debug", skip(seed), fields(seed_len = seed.len()))]
pub fn find_from(
    seed: &str,
    difficulty: usize,
    start: u64,
    max_iterations: Option<u64>,
) -> Result<u64, SearchError> {
    if difficulty > MAX_DIFFICULTY {
        return Err(SearchError::DifficultyTooHigh { difficulty });
    }
    let budget = max_iterations
        .and_then(|cap| usize::try_from(cap).ok())
        .unwrap_or(usize::MAX);

    let mut examined = 0u64;
    let found = (start.max(1)..=u64::MAX)
        .take(budget)
        .inspect(|_| examined += 1)
        .find(|&k| has_zero_prefix(&digest(seed, k), difficulty));

    match found {
        Some(k) => {
            debug!(k, examined, "match found");
            Ok(k)
        }
        None => Err(SearchError::Exhausted {
            difficulty,
            examined,
        }),
    }
}

/// Search bound to one seed that reuses answers from easier difficulties.
///
/// A digest with `d2` leading zeros also has every `d1 <= d2`, so the
/// answer for a stricter difficulty is never below a known easier one.
#[derive(Debug, Clone)]
pub struct HashSearcher {
    seed: String,
    max_iterations: Option<u64>,
    solved: BTreeMap<usize, u64>,
}

impl HashSearcher {
    pub fn new(seed: impl Into<String>, max_iterations: Option<u64>) -> Self {
        Self {
            seed: seed.into(),
            max_iterations,
            solved: BTreeMap::new(),
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Answer for `difficulty`, starting from the best known lower bound.
    pub fn find(&mut self, difficulty: usize) -> Result<u64, SearchError> {
        if let Some(&k) = self.solved.get(&difficulty) {
            debug!(difficulty, k, "memoized answer");
            return Ok(k);
        }
        let start = self
            .solved
            .range(..difficulty)
            .next_back()
            .map_or(1, |(_, &k)| k);
        let k = find_from(&self.seed, difficulty, start, self.max_iterations)?;
        self.solved.insert(difficulty, k);
        Ok(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_hex_and_stable() {
        let first = digest_hex("abcdef", 609043);
        assert_eq!(first, "000001dbbfa3a5c83a2d506429c7b00e");
        assert_eq!(first, digest_hex("abcdef", 609043));
    }

    #[test]
    fn zero_difficulty_matches_first_candidate() {
        for seed in ["", "abcdef", "pqrstuv", "yzbqklnj"] {
            assert_eq!(find_hash_integer(seed, 0, None).expect("search"), 1);
        }
    }

    #[test]
    fn known_santa_hashes() {
        let validations = [("abcdef", 5, 609043), ("pqrstuv", 5, 1048970)];
        for (seed, difficulty, expected) in validations {
            let k = find_hash_integer(seed, difficulty, None).expect("search");
            assert_eq!(k, expected, "{seed}");
        }
    }

    #[test]
    fn byte_prefix_agrees_with_hex_prefix() {
        for k in 1..2_000 {
            let raw = digest("abcdef", k);
            let hex = hex::encode(raw);
            for difficulty in 0..=3 {
                assert_eq!(
                    has_zero_prefix(&raw, difficulty),
                    hex.starts_with(&"0".repeat(difficulty)),
                    "k={k} difficulty={difficulty}"
                );
            }
        }
        assert!(has_zero_prefix(&[0; 16], MAX_DIFFICULTY));
        assert!(!has_zero_prefix(&[0; 16], MAX_DIFFICULTY + 1));
    }

    #[test]
    fn stricter_difficulty_never_finds_smaller_k() {
        let seed = "abcdef";
        let mut previous = 0;
        for difficulty in 0..=4 {
            let k = find_hash_integer(seed, difficulty, None).expect("search");
            assert!(k >= previous, "difficulty {difficulty}");
            assert!(digest_hex(seed, k).starts_with(&"0".repeat(difficulty)));
            previous = k;
        }
    }

    #[test]
    fn cap_below_answer_is_exhausted() {
        let err = find_hash_integer("abcdef", 5, Some(1_000)).expect_err("capped");
        assert_eq!(
            err,
            SearchError::Exhausted {
                difficulty: 5,
                examined: 1_000
            }
        );
    }

    #[test]
    fn search_stops_at_u64_max() {
        let err = find_from("x", MAX_DIFFICULTY, u64::MAX, None).expect_err("range end");
        assert_eq!(
            err,
            SearchError::Exhausted {
                difficulty: MAX_DIFFICULTY,
                examined: 1
            }
        );
    }

    #[test]
    fn resumed_search_counts_from_its_start() {
        let err = find_from("abcdef", 5, 500_000, Some(10)).expect_err("capped");
        assert_eq!(
            err,
            SearchError::Exhausted {
                difficulty: 5,
                examined: 10
            }
        );
    }

    #[test]
    fn rejects_impossible_difficulty() {
        let err = find_hash_integer("abcdef", 33, None).expect_err("too high");
        assert_eq!(err, SearchError::DifficultyTooHigh { difficulty: 33 });
    }

    #[test]
    fn searcher_resumes_and_matches_fresh_search() {
        let mut searcher = HashSearcher::new("abcdef", None);
        let easy = searcher.find(3).expect("easy");
        let hard = searcher.find(4).expect("hard");
        assert_eq!(easy, find_hash_integer("abcdef", 3, None).expect("fresh"));
        assert_eq!(hard, find_hash_integer("abcdef", 4, None).expect("fresh"));
        assert!(hard >= easy);
    }

    #[test]
    fn searcher_reuses_solved_difficulty() {
        let mut searcher = HashSearcher::new("abcdef", None);
        let k = searcher.find(5).expect("search");
        // A cap of zero would fail any real search.
        searcher.max_iterations = Some(0);
        assert_eq!(searcher.find(5).expect("memoized"), k);
    }
}
