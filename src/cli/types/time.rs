//! Week numbers for the NFL regular season and playoffs.

use crate::error::{RecapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    /// Sleeper serves matchups for weeks 1 through 18.
    pub const MAX: u16 = 18;

    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Last completed week given the week Sleeper reports as current.
    ///
    /// Never goes below week 1, so a preseason state (`week == 0`) or the
    /// opening week both resolve to week 1.
    pub fn last_completed(current: u16) -> Self {
        Self(current.saturating_sub(1).max(1))
    }

    /// Reject week numbers Sleeper never serves.
    pub fn validate(self) -> Result<Self> {
        if self.0 == 0 || self.0 > Self::MAX {
            return Err(RecapError::InvalidWeek { week: self.0 });
        }
        Ok(self)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = RecapError;

    fn from_str(s: &str) -> Result<Self> {
        let week = s
            .trim()
            .parse::<u16>()
            .map_err(|_| RecapError::config(format!("'{}' is not a week number", s)))?;
        Self(week).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_completed_week() {
        assert_eq!(Week::last_completed(0), Week::new(1));
        assert_eq!(Week::last_completed(1), Week::new(1));
        assert_eq!(Week::last_completed(2), Week::new(1));
        assert_eq!(Week::last_completed(9), Week::new(8));
    }

    #[test]
    fn test_week_from_str() {
        assert_eq!("5".parse::<Week>().unwrap(), Week::new(5));
        assert_eq!(" 18 ".parse::<Week>().unwrap(), Week::new(18));
    }

    #[test]
    fn test_week_from_str_out_of_range() {
        assert!(matches!(
            "0".parse::<Week>(),
            Err(RecapError::InvalidWeek { week: 0 })
        ));
        assert!(matches!(
            "19".parse::<Week>(),
            Err(RecapError::InvalidWeek { week: 19 })
        ));
    }

    #[test]
    fn test_week_from_str_garbage() {
        assert!(matches!("next".parse::<Week>(), Err(RecapError::Config { .. })));
    }

    #[test]
    fn test_week_display() {
        assert_eq!(Week::new(7).to_string(), "7");
    }
}
