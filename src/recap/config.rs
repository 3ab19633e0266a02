//! Tunable thresholds for the weekly payload.
//!
//! Every cutoff the pipeline uses lives here so league size and scoring
//! conventions are parameters rather than assumptions. The defaults match a
//! 10-12 team league with six playoff spots.
//!
//! Loaded from JSON; every field is optional:
//!
//! ```json
//! {
//!   "playoff": { "playoff_spots": 4, "bubble_cutoff": 6 },
//!   "matchup": { "blowout_margin": 25.0 },
//!   "real_names": { "@Kodiak": "Riky" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::cache::{config_dir, try_read_to_string};
use crate::error::{RecapError, Result};

/// Rank-position playoff buckets.
///
/// This is a positional cutoff over the sorted standings, not a
/// mathematical elimination calculation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayoffConfig {
    /// Ranks `0..playoff_spots` are "playoff"
    pub playoff_spots: usize,
    /// Ranks `playoff_spots..bubble_cutoff` are "bubble", the rest "out"
    pub bubble_cutoff: usize,
}

impl Default for PlayoffConfig {
    fn default() -> Self {
        Self {
            playoff_spots: 6,
            bubble_cutoff: 10,
        }
    }
}

/// Margin/projection thresholds for matchup classification and key flags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchupThresholds {
    /// margin above this is a blowout
    pub blowout_margin: f64,
    /// margin below this is a nail-biter (and always a key matchup)
    pub nail_biter_margin: f64,
    /// margin above this makes a key matchup
    pub key_margin: f64,
    /// either side projected above this makes a key matchup
    pub high_projection: f64,
    /// projections further apart than this make a key matchup
    pub projection_gap: f64,
}

impl Default for MatchupThresholds {
    fn default() -> Self {
        Self {
            blowout_margin: 20.0,
            nail_biter_margin: 2.0,
            key_margin: 10.0,
            high_projection: 130.0,
            projection_gap: 30.0,
        }
    }
}

/// Per-starter projection used when Sleeper supplies none:
/// `max(floor, ceiling - search_rank / rank_divisor)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectionFallback {
    pub ceiling: f64,
    pub floor: f64,
    pub rank_divisor: f64,
    /// used for starters with no search rank (or unknown to the player table)
    pub unranked: f64,
}

impl Default for ProjectionFallback {
    fn default() -> Self {
        Self {
            ceiling: 25.0,
            floor: 5.0,
            rank_divisor: 10.0,
            unranked: 10.0,
        }
    }
}

impl ProjectionFallback {
    pub fn project(&self, search_rank: Option<u32>) -> f64 {
        match search_rank {
            Some(rank) if self.rank_divisor > 0.0 => {
                (self.ceiling - rank as f64 / self.rank_divisor).max(self.floor)
            }
            _ => self.unranked,
        }
    }
}

/// `base + record_weight * (wins - losses) + points_weight * (pf - league_avg_pf)`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PowerScoreConfig {
    pub base: f64,
    pub record_weight: f64,
    pub points_weight: f64,
}

impl Default for PowerScoreConfig {
    fn default() -> Self {
        Self {
            base: 1500.0,
            record_weight: 20.0,
            points_weight: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RecapConfig {
    pub playoff: PlayoffConfig,
    pub matchup: MatchupThresholds,
    pub projection: ProjectionFallback,
    pub power: PowerScoreConfig,
    /// How many power-ranking rows the trimmed payload keeps
    pub trimmed_power_rankings: usize,
    /// Real-name overrides keyed by `@handle` or Sleeper user id
    pub real_names: BTreeMap<String, String>,
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            playoff: PlayoffConfig::default(),
            matchup: MatchupThresholds::default(),
            projection: ProjectionFallback::default(),
            power: PowerScoreConfig::default(),
            trimmed_power_rankings: 10,
            real_names: BTreeMap::new(),
        }
    }
}

impl RecapConfig {
    /// Path: <config_dir>/sleeper-recap/config.json
    pub fn default_path() -> PathBuf {
        config_dir().join("config.json")
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file, or the default location if it exists,
    /// or fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let s = try_read_to_string(p).ok_or_else(|| {
                    RecapError::config(format!("Failed to read config {}", p.display()))
                })?;
                Self::from_json(&s)
            }
            None => match try_read_to_string(&Self::default_path()) {
                Some(s) => Self::from_json(&s),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.playoff.bubble_cutoff < self.playoff.playoff_spots {
            return Err(RecapError::config(format!(
                "bubble_cutoff ({}) must not be below playoff_spots ({})",
                self.playoff.bubble_cutoff, self.playoff.playoff_spots
            )));
        }
        if self.matchup.nail_biter_margin > self.matchup.blowout_margin {
            return Err(RecapError::config(
                "nail_biter_margin must not exceed blowout_margin",
            ));
        }
        if self.projection.floor > self.projection.ceiling {
            return Err(RecapError::config(
                "projection floor must not exceed ceiling",
            ));
        }
        Ok(())
    }

    /// Real-name override for a manager, checked by handle then user id.
    pub fn real_name_for(&self, handle: &str, user_id: &str) -> Option<&str> {
        self.real_names
            .get(handle)
            .or_else(|| self.real_names.get(user_id))
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}
