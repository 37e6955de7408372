use crate::domain::{TournamentId, UserId};
use crate::report::ReportKind;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
    pub user_id: UserId,
    pub tournament_id: Option<TournamentId>,
    pub report: ReportKind,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let store_path = env_map
            .get("STORE_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnv("STORE_PATH".to_string()))?;

        let user_id = env_map
            .get("USER_ID")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(UserId::new)
            .ok_or_else(|| ConfigError::MissingEnv("USER_ID".to_string()))?;

        let tournament_id = match env_map.get("TOURNAMENT_ID").map(|s| s.trim()) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map(TournamentId::new).map_err(|_| {
                ConfigError::InvalidValue(
                    "TOURNAMENT_ID".to_string(),
                    "must be a valid i64".to_string(),
                )
            })?),
        };

        let report = match env_map
            .get("REPORT")
            .map(|s| s.as_str())
            .unwrap_or("standings")
        {
            "dashboard" => ReportKind::Dashboard,
            "standings" => ReportKind::Standings,
            "scorers" => ReportKind::Scorers,
            "statistics" => ReportKind::Statistics,
            other => {
                return Err(ConfigError::InvalidValue(
                    "REPORT".to_string(),
                    format!(
                        "must be dashboard, standings, scorers, or statistics, got {}",
                        other
                    ),
                ))
            }
        };

        let output_format = match env_map
            .get("OUTPUT_FORMAT")
            .map(|s| s.as_str())
            .unwrap_or("json")
        {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            other => {
                return Err(ConfigError::InvalidValue(
                    "OUTPUT_FORMAT".to_string(),
                    format!("must be json or csv, got {}", other),
                ))
            }
        };

        Ok(Config {
            store_path,
            user_id,
            tournament_id,
            report,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_required_env() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("STORE_PATH".to_string(), "/tmp/league".to_string());
        map.insert("USER_ID".to_string(), "1".to_string());
        map
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(setup_required_env()).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/league"));
        assert_eq!(config.user_id, UserId::new("1"));
        assert_eq!(config.tournament_id, None);
        assert_eq!(config.report, ReportKind::Standings);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_store_path() {
        let mut env_map = setup_required_env();
        env_map.remove("STORE_PATH");
        match Config::from_env_map(env_map) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "STORE_PATH"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_blank_user_id_is_missing() {
        let mut env_map = setup_required_env();
        env_map.insert("USER_ID".to_string(), "  ".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::MissingEnv(s)) => assert_eq!(s, "USER_ID"),
            _ => panic!("Expected MissingEnv error"),
        }
    }

    #[test]
    fn test_tournament_id() {
        let mut env_map = setup_required_env();
        env_map.insert("TOURNAMENT_ID".to_string(), "1700000000001".to_string());
        let config = Config::from_env_map(env_map.clone()).unwrap();
        assert_eq!(config.tournament_id, Some(TournamentId::new(1700000000001)));

        env_map.insert("TOURNAMENT_ID".to_string(), "".to_string());
        assert_eq!(Config::from_env_map(env_map).unwrap().tournament_id, None);
    }

    #[test]
    fn test_invalid_tournament_id() {
        let mut env_map = setup_required_env();
        env_map.insert("TOURNAMENT_ID".to_string(), "abc".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "TOURNAMENT_ID"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_report() {
        let mut env_map = setup_required_env();
        env_map.insert("REPORT".to_string(), "fixtures".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "REPORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_output_format() {
        let mut env_map = setup_required_env();
        env_map.insert("OUTPUT_FORMAT".to_string(), "xml".to_string());
        match Config::from_env_map(env_map) {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "OUTPUT_FORMAT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
