//! File system helpers for cached Sleeper data and written payloads
//!
//! The NFL players table is several megabytes and changes slowly, so it is
//! kept on disk between runs. Payload documents are plain overwrite-in-place
//! JSON files.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::cli::types::Week;

const APP_DIR: &str = "sleeper-recap";

/// Base: ~/.cache/sleeper-recap
pub fn cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(APP_DIR)
}

/// Base: ~/.config/sleeper-recap
pub fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join(APP_DIR)
}

/// Path: ~/.cache/sleeper-recap/players_nfl.json
pub fn players_table_path() -> PathBuf {
    cache_dir().join("players_nfl.json")
}

/// The four documents written for one week, all overwritten on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadPaths {
    pub week_full: PathBuf,
    pub week_trimmed: PathBuf,
    pub latest_full: PathBuf,
    pub latest_trimmed: PathBuf,
}

impl PayloadPaths {
    pub fn new(out_dir: &Path, week: Week) -> Self {
        Self {
            week_full: out_dir.join(format!("week_{}.json", week.as_u16())),
            week_trimmed: out_dir.join(format!("week_{}_trimmed.json", week.as_u16())),
            latest_full: out_dir.join("latest.json"),
            latest_trimmed: out_dir.join("latest_trimmed.json"),
        }
    }
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
