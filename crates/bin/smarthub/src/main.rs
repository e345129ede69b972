//! # smarthub — interactive home automation hub
//!
//! Composition root that wires configuration, logging, the hub and the shell.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` on stderr so it never interleaves with the shell
//! - Seed the hub with the configured devices
//! - Run the shell on stdin/stdout until `exit`
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! Device behaviour lives in the domain and app crates, not here.

mod config;

use anyhow::Context;
use smarthub_adapter_shell::Shell;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let hub = config.build_hub().context("failed to seed devices")?;
    tracing::info!(devices = hub.len(), "hub ready");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Shell::new(hub, stdin, stdout)
        .run()
        .context("shell terminated")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn env_filter(logging: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&logging.filter)
        .with_context(|| format!("invalid log filter {:?}", logging.filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
        }
    }

    #[test]
    fn should_accept_default_filter() {
        assert!(env_filter(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn should_accept_per_target_filter() {
        assert!(env_filter(&logging("smarthub_app=debug,warn")).is_ok());
    }

    #[test]
    fn should_report_invalid_filter_instead_of_falling_back() {
        let err = env_filter(&logging("smarthub=loud")).unwrap_err();
        assert_eq!(err.to_string(), "invalid log filter \"smarthub=loud\"");
    }
}
