//! Test-only helpers for laying out input directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::io::config::{PuzzlesConfig, write_config};

/// Write `text` as the input file of `day` under `dir`.
pub fn write_input(dir: &Path, day: u8, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(format!("day{day}.txt"));
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Write a `puzzles.toml` in `root` pointing at `root/inputs`.
pub fn write_workspace_config(
    root: &Path,
    edit: impl FnOnce(&mut PuzzlesConfig),
) -> Result<PathBuf> {
    let mut cfg = PuzzlesConfig {
        inputs_dir: root.join("inputs"),
        ..PuzzlesConfig::default()
    };
    edit(&mut cfg);
    let path = root.join("puzzles.toml");
    write_config(&path, &cfg)?;
    Ok(path)
}
