//! Hub — the registry that owns devices and dispatches commands by id.

use std::collections::BTreeMap;

use smarthub_domain::device::{ActionOutcome, Device};
use smarthub_domain::error::{HubError, NotFoundError};
use smarthub_domain::id::DeviceId;

/// Header line of [`Hub::display_all_devices`].
pub const STATUS_HEADER: &str = "Device Status:";

/// Registry of devices keyed by id.
///
/// Devices are held by value and only reachable through their id. Iteration
/// follows ascending id order.
#[derive(Debug, Default)]
pub struct Hub {
    devices: BTreeMap<DeviceId, Device>,
}

impl Hub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hub pre-populated with `devices`, registered in order.
    ///
    /// Later devices replace earlier ones sharing the same id, exactly as
    /// repeated [`add_device`](Self::add_device) calls would.
    pub fn with_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        let mut hub = Self::new();
        for device in devices {
            hub.add_device(device);
        }
        hub
    }

    /// Register `device` under its own id.
    ///
    /// A device already registered under that id is replaced, state included,
    /// and handed back to the caller.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id(), kind = device.kind().label()))]
    pub fn add_device(&mut self, device: Device) -> Option<Device> {
        let replaced = self.devices.insert(device.id().clone(), device);
        if let Some(previous) = &replaced {
            tracing::warn!(previous = previous.name(), "replaced device with same id");
        } else {
            tracing::debug!("device registered");
        }
        replaced
    }

    /// Whether a device is registered under `id`.
    #[must_use]
    pub fn is_valid_device_id(&self, id: &str) -> bool {
        self.devices.contains_key(id)
    }

    /// Run the action of the device registered under `id`.
    ///
    /// This dispatches the device's full kind-specific action, not only the
    /// power flip.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no device has that id; no device is
    /// touched in that case.
    #[tracing::instrument(skip(self))]
    pub fn toggle_device(&mut self, id: &str) -> Result<ActionOutcome, HubError> {
        let device = self.devices.get_mut(id).ok_or_else(|| NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })?;
        let outcome = device.perform_action();
        tracing::debug!(state = %outcome.state, "device action performed");
        Ok(outcome)
    }

    /// Render the status header followed by each device's status block.
    #[must_use]
    pub fn display_all_devices(&self) -> String {
        let mut lines = vec![STATUS_HEADER.to_string()];
        lines.extend(self.devices.values().map(Device::display_status));
        lines.join("\n")
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    /// All devices, in ascending id order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Sum of the power currently drawn by every device.
    #[must_use]
    pub fn total_power(&self) -> f64 {
        self.devices.values().map(Device::current_power).sum()
    }
}
