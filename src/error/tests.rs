//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("disk full").context("Failed to write key @players");
        let stats_error = StatsError::from(anyhow_error);

        match stats_error {
            StatsError::Storage { message } => {
                assert!(message.contains("Failed to write key @players"));
                assert!(message.contains("disk full"));
            }
            _ => panic!("Expected Storage error variant"),
        }
    }

    #[test]
    fn test_invalid_input_error() {
        let error = StatsError::invalid_input("hits", "exceeds at bats (12 > 10)");

        let error_string = error.to_string();
        assert_eq!(error_string, "Invalid hits: exceeds at bats (12 > 10)");
    }

    #[test]
    fn test_api_error() {
        let error = StatsError::Api {
            status: 503,
            message: "Service Unavailable".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("503"));
        assert!(error_string.contains("Service Unavailable"));
    }

    #[test]
    fn test_not_found_errors() {
        let error = StatsError::PlayerNotFound {
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Player not found: 42");

        let error = StatsError::TeamNotFound {
            id: "team_1".to_string(),
        };
        assert_eq!(error.to_string(), "Team not found: team_1");
    }

    #[test]
    fn test_invalid_credentials_error() {
        let error = StatsError::InvalidCredentials;
        assert_eq!(error.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        let error_trait: &dyn std::error::Error = &stats_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = StatsError::NotAuthenticated;
        let debug_string = format!("{:?}", error);
        assert_eq!(debug_string, "NotAuthenticated");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(StatsError::MissingField {
                field: "name".to_string(),
            })
        }

        match test_function().unwrap_err() {
            StatsError::MissingField { field } => assert_eq!(field, "name"),
            _ => panic!("Expected MissingField error"),
        }
    }
}
