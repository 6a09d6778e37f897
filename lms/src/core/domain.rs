use serde::{Deserialize, Serialize};

// Titled defines the common trait shared by every catalog document
pub trait Titled: Sync + Send {
    fn title(&self) -> &str;
}


// Configuration abstracts config options for the catalog library
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "info".to_string(),
            json_logs: true,
        }
    }

    // reads LMS_BRANCH_ID, LMS_LOG_LEVEL and LMS_JSON_LOGS, keeping defaults for missing values
    pub fn from_env() -> Self {
        let mut config = Configuration::new(
            std::env::var("LMS_BRANCH_ID").unwrap_or_else(|_| "default".to_string()).as_str());
        if let Ok(level) = std::env::var("LMS_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Ok(json) = std::env::var("LMS_JSON_LOGS") {
            config.json_logs = !matches!(json.to_lowercase().as_str(), "0" | "false" | "no");
        }
        config
    }

    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("info", config.log_level.as_str());
        assert!(config.json_logs);
    }

    #[tokio::test]
    async fn test_should_parse_log_level() {
        let mut config = Configuration::new("test");
        config.log_level = "debug".to_string();
        assert_eq!(tracing::Level::DEBUG, config.max_level());
        config.log_level = "chatty".to_string();
        assert_eq!(tracing::Level::INFO, config.max_level());
    }

    #[tokio::test]
    async fn test_should_build_config_from_env() {
        std::env::set_var("LMS_BRANCH_ID", "east");
        std::env::set_var("LMS_JSON_LOGS", "false");
        let config = Configuration::from_env();
        std::env::remove_var("LMS_BRANCH_ID");
        std::env::remove_var("LMS_JSON_LOGS");
        assert_eq!("east", config.branch_id.as_str());
        assert!(!config.json_logs);
    }
}
