//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthub.toml` in the working directory (or the path in
//! `SMARTHUB_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::collections::HashSet;

use serde::Deserialize;
use smarthub_app::hub::Hub;
use smarthub_domain::device::Device;
use smarthub_domain::error::HubError;

const DEFAULT_PATH: &str = "smarthub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Devices registered at startup. When absent, the living-room demo
    /// devices are used.
    pub devices: Option<Vec<Device>>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// The devices a fresh hub starts with.
///
/// # Errors
///
/// Returns [`HubError::Validation`] if a literal breaks a device invariant.
pub fn default_devices() -> Result<Vec<Device>, HubError> {
    Ok(vec![
        Device::light("light1", "Living Room Light", 50.0)?,
        Device::thermostat("thermo1", "Living Room Thermostat", 200.0, 22.5)?,
    ])
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SMARTHUB_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SMARTHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let Some(devices) = &self.devices else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for device in devices {
            if !seen.insert(device.id().as_str()) {
                return Err(ConfigError::Validation(format!(
                    "device id {} is declared more than once",
                    device.id()
                )));
            }
        }
        Ok(())
    }

    /// Build the hub with the configured (or default) devices.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Device`] if a default device fails validation.
    pub fn build_hub(&self) -> Result<Hub, ConfigError> {
        let devices = match &self.devices {
            Some(devices) => devices.clone(),
            None => default_devices()?,
        };
        Ok(Hub::with_devices(devices))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A built-in device breaks a device invariant.
    #[error("invalid device")]
    Device(#[from] HubError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthub_domain::device::DeviceKind;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "warn");
        assert!(config.devices.is_none());
    }

    #[test]
    fn should_seed_living_room_devices_by_default() {
        let hub = Config::default().build_hub().unwrap();
        assert_eq!(hub.len(), 2);
        let light = hub.device("light1").unwrap();
        assert_eq!(light.name(), "Living Room Light");
        assert!((light.power_consumption() - 50.0).abs() < f64::EPSILON);
        let thermostat = hub.device("thermo1").unwrap();
        assert_eq!(thermostat.name(), "Living Room Thermostat");
        assert_eq!(
            thermostat.kind(),
            &DeviceKind::Thermostat { temperature: 22.5 }
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert!(config.devices.is_none());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'smarthub=debug'

            [[devices]]
            kind = 'light'
            id = 'porch'
            name = 'Porch Light'
            power_consumption = 12.5

            [[devices]]
            kind = 'thermostat'
            id = 'hall'
            name = 'Hall Thermostat'
            power_consumption = 150.0
            temperature = 19.5
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "smarthub=debug");
        config.validate().unwrap();

        let hub = config.build_hub().unwrap();
        assert_eq!(hub.len(), 2);
        assert_eq!(hub.device("porch").unwrap().kind(), &DeviceKind::Light);
        assert_eq!(
            hub.device("hall").unwrap().kind(),
            &DeviceKind::Thermostat { temperature: 19.5 }
        );
        assert!(!hub.device("hall").unwrap().is_on());
    }

    #[test]
    fn should_build_empty_hub_for_empty_device_list() {
        let config: Config = toml::from_str("devices = []").unwrap();
        let hub = config.build_hub().unwrap();
        assert!(hub.is_empty());
    }

    #[test]
    fn should_reject_duplicate_device_ids() {
        let toml = "
            [[devices]]
            kind = 'light'
            id = 'lamp'
            name = 'Lamp A'
            power_consumption = 10.0

            [[devices]]
            kind = 'light'
            id = 'lamp'
            name = 'Lamp B'
            power_consumption = 10.0
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_report_parse_error_for_invalid_device() {
        let toml = "
            [[devices]]
            kind = 'light'
            id = 'lamp'
            name = 'Lamp'
            power_consumption = -10.0
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_unknown_device_kind() {
        let toml = "
            [[devices]]
            kind = 'toaster'
            id = 't'
            name = 'Toaster'
            power_consumption = 800.0
        ";
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert!(config.devices.is_none());
    }

    #[test]
    fn should_prefer_rust_log_over_smarthub_log() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "SMARTHUB_LOG" => Some("info".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_keep_file_filter_without_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(|_| None);
        assert_eq!(config.logging.filter, "warn");
    }
}
