use std::path::PathBuf;

use clap::Parser;

/// Scholarship advisor configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "scholarship-advisor")]
#[command(about = "Scholarship eligibility advisor backed by a priority rule engine")]
pub struct Config {
    /// HTTP server listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "SCHOLARSHIP_LISTEN_ADDR")]
    pub listen_addr: String,

    /// Path to a rule book YAML file (uses the built-in rules when unset)
    #[arg(long, env = "SCHOLARSHIP_RULES_PATH")]
    pub rules_path: Option<PathBuf>,

    /// Validate the rule book and exit without serving
    #[arg(long, default_value = "false")]
    pub check_rules: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, default_value = "false", env = "SCHOLARSHIP_LOG_JSON")]
    pub log_json: bool,

    /// Enable graceful shutdown
    #[arg(long, default_value = "true", env = "SCHOLARSHIP_GRACEFUL_SHUTDOWN")]
    pub graceful_shutdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            rules_path: None,
            check_rules: false,
            log_level: "info".to_string(),
            log_json: false,
            graceful_shutdown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.rules_path.is_none());
        assert!(config.graceful_shutdown);
    }

    #[test]
    fn test_parse_args() {
        let config = Config::try_parse_from([
            "scholarship-advisor",
            "--listen-addr",
            "127.0.0.1:9000",
            "--rules-path",
            "/etc/scholarship/rules.yaml",
            "--check-rules",
        ])
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(
            config.rules_path,
            Some(PathBuf::from("/etc/scholarship/rules.yaml"))
        );
        assert!(config.check_rules);
    }
}
