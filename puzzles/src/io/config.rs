//! Solver configuration stored in `puzzles.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::balance::{Balance, SymbolPolicy};
use crate::core::hash_search::MAX_DIFFICULTY;

/// Solver configuration (TOML).
///
/// Missing fields default to the values used for the published puzzles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PuzzlesConfig {
    /// Directory holding `day<N>.txt` input files.
    pub inputs_dir: PathBuf,

    pub balance: BalanceConfig,

    pub hash: HashConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BalanceConfig {
    pub up: char,
    pub down: char,
    /// Treatment of characters that are neither `up` nor `down`.
    pub policy: SymbolPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HashConfig {
    /// Required leading zeros for part 1 and part 2.
    pub difficulties: Vec<usize>,
    /// Stop a search after this many candidates. Unbounded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u64>,
}

impl Default for PuzzlesConfig {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("inputs"),
            balance: BalanceConfig::default(),
            hash: HashConfig::default(),
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        let balance = Balance::default();
        Self {
            up: balance.up,
            down: balance.down,
            policy: balance.policy,
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            difficulties: vec![5, 6],
            max_iterations: None,
        }
    }
}

impl BalanceConfig {
    pub fn to_balance(&self) -> Balance {
        Balance {
            up: self.up,
            down: self.down,
            policy: self.policy,
        }
    }
}

impl PuzzlesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.inputs_dir.as_os_str().is_empty() {
            return Err(anyhow!("inputs_dir must be non-empty"));
        }
        if self.balance.up == self.balance.down {
            return Err(anyhow!("balance.up and balance.down must differ"));
        }
        if self.hash.difficulties.len() != 2 {
            return Err(anyhow!(
                "hash.difficulties must list exactly 2 values (got {})",
                self.hash.difficulties.len()
            ));
        }
        if let Some(&d) = self.hash.difficulties.iter().find(|&&d| d > MAX_DIFFICULTY) {
            return Err(anyhow!(
                "hash.difficulties must be <= {MAX_DIFFICULTY} (got {d})"
            ));
        }
        if self.hash.max_iterations == Some(0) {
            return Err(anyhow!("hash.max_iterations must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PuzzlesConfig::default()`.
pub fn load_config(path: &Path) -> Result<PuzzlesConfig> {
    if !path.exists() {
        let cfg = PuzzlesConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PuzzlesConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PuzzlesConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
