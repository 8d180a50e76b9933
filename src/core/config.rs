

use serde::{Deserialize, Serialize};

use super::error::{MedQaError, Result};


pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";

pub const DEFAULT_NEO4J_USER: &str = "neo4j";

pub const DEFAULT_DATABASE: &str = "neo4j";

pub const DEFAULT_MAX_CONNECTIONS: usize = 4;

pub const DEFAULT_FETCH_SIZE: usize = 200;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedQaConfig {

    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,


    pub max_connections: usize,
    pub fetch_size: usize,
}

impl MedQaConfig {

    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            user: DEFAULT_NEO4J_USER.to_string(),
            password: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            fetch_size: DEFAULT_FETCH_SIZE,
        }
    }


    pub fn from_env() -> Self {
        let mut config = Self::new(
            &std::env::var("MEDQA_NEO4J_URI").unwrap_or_else(|_| DEFAULT_NEO4J_URI.to_string()),
        );

        if let Ok(user) = std::env::var("MEDQA_NEO4J_USER") {
            config.user = user;
        }
        if let Ok(password) = std::env::var("MEDQA_NEO4J_PASSWORD") {
            config.password = password;
        }
        if let Ok(database) = std::env::var("MEDQA_NEO4J_DATABASE") {
            config.database = database;
        }
        config.max_connections = std::env::var("MEDQA_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        config.fetch_size = std::env::var("MEDQA_FETCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FETCH_SIZE);

        config
    }


    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(MedQaError::Config("Neo4j URI cannot be empty".into()));
        }
        if self.database.trim().is_empty() {
            return Err(MedQaError::Config("Database name cannot be empty".into()));
        }
        if self.max_connections == 0 {
            return Err(MedQaError::Config("max_connections must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for MedQaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NEO4J_URI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MedQaConfig::default();
        assert_eq!(config.uri, "bolt://localhost:7687");
        assert_eq!(config.user, "neo4j");
        assert_eq!(config.database, "neo4j");
        assert_eq!(config.max_connections, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let config = MedQaConfig::new("  ");
        assert!(matches!(config.validate(), Err(MedQaError::Config(_))));

        let mut config = MedQaConfig::default();
        config.database = String::new();
        assert!(config.validate().is_err());

        let mut config = MedQaConfig::default();
        config.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let mut config = MedQaConfig::new("bolt://graph:7690");
        config.database = "MedicalGraph".into();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MedQaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
