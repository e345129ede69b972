//! Device — a controllable appliance with an on/off state and a
//! kind-specific action.
//!
//! Every device shares the same base fields (id, name, wattage, power
//! state). What differs per kind is captured by [`DeviceKind`]: the action
//! run on a toggle request and the extra lines of the status block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HubError, ValidationError};
use crate::id::DeviceId;
use crate::state::PowerState;

/// Kind-specific data and behaviour of a [`Device`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Thermostat {
        /// Target temperature in °C, applied whenever the thermostat turns on.
        temperature: f64,
    },
}

impl DeviceKind {
    /// Short human-readable label (`"light"`, `"thermostat"`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat { .. } => "thermostat",
        }
    }
}

/// A single controllable appliance.
///
/// Everything but the power state is fixed at construction. The state starts
/// [`PowerState::Off`] and only changes through [`Device::toggle`] or
/// [`Device::perform_action`].
///
/// Deserialization goes through [`DeviceBuilder`], so a decoded device obeys
/// the same invariants and always starts off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeviceRecord")]
pub struct Device {
    id: DeviceId,
    name: String,
    /// Watts drawn while on.
    power_consumption: f64,
    state: PowerState,
    #[serde(flatten)]
    kind: DeviceKind,
}

/// Wire shape of a [`Device`]; any `state` field is ignored.
#[derive(Deserialize)]
struct DeviceRecord {
    id: DeviceId,
    name: String,
    power_consumption: f64,
    #[serde(flatten)]
    kind: DeviceKind,
}

impl TryFrom<DeviceRecord> for Device {
    type Error = HubError;

    fn try_from(record: DeviceRecord) -> Result<Self, Self::Error> {
        Self::builder()
            .id(record.id)
            .name(record.name)
            .power_consumption(record.power_consumption)
            .kind(record.kind)
            .build()
    }
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Build a light.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when a field breaks an invariant.
    pub fn light(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        power_consumption: f64,
    ) -> Result<Self, HubError> {
        Self::builder()
            .id(id)
            .name(name)
            .power_consumption(power_consumption)
            .kind(DeviceKind::Light)
            .build()
    }

    /// Build a thermostat with a fixed target temperature.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when a field breaks an invariant.
    pub fn thermostat(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        power_consumption: f64,
        temperature: f64,
    ) -> Result<Self, HubError> {
        Self::builder()
            .id(id)
            .name(name)
            .power_consumption(power_consumption)
            .kind(DeviceKind::Thermostat { temperature })
            .build()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] when the id or name is empty, the
    /// wattage is negative or not finite, or a thermostat temperature is not
    /// finite.
    pub fn validate(&self) -> Result<(), HubError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.power_consumption.is_finite() || self.power_consumption < 0.0 {
            return Err(ValidationError::InvalidPower(self.power_consumption).into());
        }
        if let DeviceKind::Thermostat { temperature } = self.kind
            && !temperature.is_finite()
        {
            return Err(ValidationError::InvalidTemperature(temperature).into());
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    #[must_use]
    pub fn state(&self) -> PowerState {
        self.state
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Configured wattage, regardless of state.
    #[must_use]
    pub fn power_consumption(&self) -> f64 {
        self.power_consumption
    }

    /// Power currently drawn: the configured wattage while on, `0` while off.
    #[must_use]
    pub fn current_power(&self) -> f64 {
        if self.is_on() {
            self.power_consumption
        } else {
            0.0
        }
    }

    /// Flip the power state and return the `"<name> is now ON|OFF"` line.
    pub fn toggle(&mut self) -> String {
        self.state = self.state.toggled();
        format!("{} is now {}", self.name, self.state)
    }

    /// Run the kind-specific action.
    ///
    /// A light just toggles. A thermostat toggles and, when that turned it on,
    /// also reports the temperature it is set to.
    pub fn perform_action(&mut self) -> ActionOutcome {
        let mut messages = vec![self.toggle()];
        if let DeviceKind::Thermostat { temperature } = self.kind
            && self.is_on()
        {
            messages.push(format!("  Setting temperature to {temperature}°C"));
        }
        ActionOutcome {
            device_id: self.id.clone(),
            state: self.state,
            messages,
        }
    }

    /// Render the status block, one line per `\n`, without a trailing newline.
    #[must_use]
    pub fn display_status(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}) - {} | Power: {}W",
            self.name,
            self.id,
            self.state,
            self.current_power()
        )?;
        match self.kind {
            DeviceKind::Light => f.write_str("\n  (Smart Light)"),
            DeviceKind::Thermostat { temperature } if self.is_on() => {
                write!(f, "\n  Temperature: {temperature}°C")
            }
            DeviceKind::Thermostat { .. } => Ok(()),
        }
    }
}

/// Result of [`Device::perform_action`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub device_id: DeviceId,
    /// State the device ended up in.
    pub state: PowerState,
    /// Human-readable report lines, in the order they were produced.
    pub messages: Vec<String>,
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    power_consumption: Option<f64>,
    kind: Option<DeviceKind>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn power_consumption(mut self, watts: f64) -> Self {
        self.power_consumption = Some(watts);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder, validate, and return a [`Device`] in the off state.
    ///
    /// Missing wattage defaults to `0` and a missing kind to
    /// [`DeviceKind::Light`].
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the id or name is missing or empty,
    /// or a numeric field is out of range.
    pub fn build(self) -> Result<Device, HubError> {
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            name: self.name.unwrap_or_default(),
            power_consumption: self.power_consumption.unwrap_or_default(),
            state: PowerState::Off,
            kind: self.kind.unwrap_or(DeviceKind::Light),
        };
        device.validate()?;
        Ok(device)
    }
}
