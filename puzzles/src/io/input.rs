//! Puzzle input loading.
//!
//! Inputs live in `<inputs_dir>/day<N>.txt`, one file per puzzle day.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::puzzle::PuzzleId;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("input {} is unavailable", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input {} is empty", .path.display())]
    Empty { path: PathBuf },
}

/// Supplies the text lines of a puzzle's input.
pub trait InputSource {
    fn lines(&self, id: PuzzleId) -> Result<Vec<String>, InputError>;

    /// First line of the input, without its line ending.
    fn first_line(&self, id: PuzzleId) -> Result<String, InputError> {
        self.lines(id)?
            .into_iter()
            .next()
            .ok_or_else(|| InputError::Empty {
                path: PathBuf::from(format!("day{id}")),
            })
    }
}

/// Reads inputs from a directory of `day<N>.txt` files.
#[derive(Debug, Clone)]
pub struct FileInput {
    dir: PathBuf,
}

impl FileInput {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: PuzzleId) -> PathBuf {
        self.dir.join(format!("day{id}.txt"))
    }
}

impl InputSource for FileInput {
    fn lines(&self, id: PuzzleId) -> Result<Vec<String>, InputError> {
        let path = self.path_for(id);
        debug!(path = %path.display(), "reading input");
        let contents = fs::read_to_string(&path).map_err(|source| InputError::Unavailable {
            path: path.clone(),
            source,
        })?;
        let lines: Vec<String> = parse_lines(&contents);
        if lines.is_empty() {
            return Err(InputError::Empty { path });
        }
        Ok(lines)
    }
}

/// In-memory input, one text per puzzle.
#[derive(Debug, Clone, Default)]
pub struct StaticInput {
    entries: Vec<(PuzzleId, String)>,
}

impl StaticInput {
    pub fn with(mut self, id: PuzzleId, text: impl Into<String>) -> Self {
        self.entries.push((id, text.into()));
        self
    }
}

impl InputSource for StaticInput {
    fn lines(&self, id: PuzzleId) -> Result<Vec<String>, InputError> {
        let path = PathBuf::from(format!("day{id}"));
        let (_, text) = self
            .entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .ok_or_else(|| InputError::Unavailable {
                path: path.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })?;
        let lines: Vec<String> = parse_lines(text);
        if lines.is_empty() {
            return Err(InputError::Empty { path });
        }
        Ok(lines)
    }
}

/// Parse each line as `T`, skipping lines that fail to parse.
pub fn parse_lines<T: FromStr>(input: &str) -> Vec<T> {
    input
        .lines()
        .filter_map(|line| line.parse::<T>().ok())
        .collect()
}
