//! Device identifier.
//!
//! Ids are chosen by whoever declares the device (`light1`, `thermo1`, …),
//! so unlike generated keys they are plain strings wrapped in a newtype.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Device`](crate::device::Device), unique within a hub.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DeviceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Lets `BTreeMap<DeviceId, _>` be queried with a plain `&str`.
impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_inner_string() {
        assert_eq!(DeviceId::new("light1").to_string(), "light1");
    }

    #[test]
    fn should_order_lexicographically() {
        let mut ids = vec![DeviceId::from("thermo1"), DeviceId::from("light1")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "light1");
    }

    #[test]
    fn should_serialize_as_bare_string() {
        let id = DeviceId::from("thermo1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"thermo1\"");
    }

    #[test]
    fn should_report_empty() {
        assert!(DeviceId::new("").is_empty());
        assert!(!DeviceId::new("a").is_empty());
    }
}
