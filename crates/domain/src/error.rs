//! Common error types used across the workspace.
//!
//! Each failure mode has its own typed error; [`HubError`] aggregates them
//! via `#[from]` so callers can propagate with `?`.

/// Top-level error for hub and device operations.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A device could not be built because one of its fields is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("device id must not be empty")]
    EmptyId,

    #[error("device name must not be empty")]
    EmptyName,

    #[error("power consumption must be a finite, non-negative number (got {0})")]
    InvalidPower(f64),

    #[error("temperature must be a finite number (got {0})")]
    InvalidTemperature(f64),
}

/// Lookup miss by identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with ID {id} not found!")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_message_for_device() {
        let err = NotFoundError {
            entity: "Device",
            id: "lamp9".to_string(),
        };
        assert_eq!(err.to_string(), "Device with ID lamp9 not found!");
    }

    #[test]
    fn should_keep_not_found_message_through_hub_error() {
        let err: HubError = NotFoundError {
            entity: "Device",
            id: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Device with ID x not found!");
        assert!(matches!(err, HubError::NotFound(_)));
    }

    #[test]
    fn should_convert_validation_error() {
        let err: HubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            HubError::Validation(ValidationError::EmptyName)
        ));
    }
}
