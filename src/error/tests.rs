//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod recap_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let recap_error = RecapError::from(json_error);

        match recap_error {
            RecapError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let recap_error = RecapError::from(io_error);

        match recap_error {
            RecapError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let recap_error = RecapError::from(header_error);

        match recap_error {
            RecapError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let recap_error = RecapError::from(parse_error);

        match recap_error {
            RecapError::InvalidLeagueId(_) => (),
            _ => panic!("Expected InvalidLeagueId error variant"),
        }
    }

    #[test]
    fn test_config_helper() {
        let err = RecapError::config("bad threshold");
        match &err {
            RecapError::Config { message } => assert_eq!(message, "bad threshold"),
            _ => panic!("Expected Config error variant"),
        }
        assert_eq!(err.to_string(), "Config error: bad threshold");
    }
}

#[cfg(test)]
mod error_display_tests {
    use super::*;

    #[test]
    fn test_missing_league_id_display() {
        let error = RecapError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "League ID not provided and SLEEPER_LEAGUE_ID environment variable not set"
        );
    }

    #[test]
    fn test_no_data_display() {
        let error = RecapError::NoData {
            endpoint: "league/123/rosters".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Sleeper API returned no data for league/123/rosters"
        );
    }

    #[test]
    fn test_invalid_week_display() {
        let error = RecapError::InvalidWeek { week: 0 };
        assert_eq!(error.to_string(), "Invalid week: 0");
    }

    #[test]
    fn test_error_debug_format() {
        let error = RecapError::InvalidWeek { week: 25 };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidWeek"));
        assert!(debug_str.contains("25"));
    }
}
