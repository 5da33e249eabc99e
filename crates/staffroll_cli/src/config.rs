//! Command-line and environment configuration.
//!
//! # Invariants
//! - Every flag can also be set through its `STAFFROLL_*` variable; an
//!   explicit flag wins over the environment.

use clap::Parser;
use staffroll_core::default_log_level;

/// Database path that selects an in-memory store.
pub const IN_MEMORY_DB: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "staffroll")]
#[command(about = "REST backend for employees, departments and projects")]
pub struct Config {
    /// Socket address the HTTP server listens on.
    #[arg(long, env = "STAFFROLL_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// SQLite database file, or `:memory:` for a throwaway store.
    #[arg(long, env = "STAFFROLL_DB_PATH", default_value = "staffroll.sqlite3")]
    pub db_path: String,

    #[arg(long, env = "STAFFROLL_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,

    /// Absolute directory for rolling log files; stderr when unset.
    #[arg(long, env = "STAFFROLL_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Config {
    pub fn uses_in_memory_db(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, IN_MEMORY_DB};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Config::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "staffroll",
            "--bind",
            "0.0.0.0:9000",
            "--db-path",
            IN_MEMORY_DB,
            "--log-level",
            "warn",
            "--log-dir",
            "/var/log/staffroll",
        ])
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:9000");
        assert!(config.uses_in_memory_db());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/staffroll"));
    }

    #[test]
    fn file_database_is_not_in_memory() {
        let config =
            Config::try_parse_from(["staffroll", "--db-path", "/tmp/staffroll.sqlite3"]).unwrap();
        assert!(!config.uses_in_memory_db());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Config::try_parse_from(["staffroll", "--port", "80"]).is_err());
    }
}
