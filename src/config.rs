use std::path::{Path, PathBuf};

/// File name of the contact database, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "agenda.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    pub database: PathBuf,
}

impl AgendaConfig {
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Self { database: path.into() }
    }

    pub fn database(&self) -> &Path {
        &self.database
    }
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self::with_database(DEFAULT_DATABASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_is_relative() {
        let config = AgendaConfig::default();
        assert_eq!(config.database(), Path::new("agenda.db"));
        assert!(config.database().is_relative());
    }
}
