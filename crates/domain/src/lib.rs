//! # smarthub-domain
//!
//! Pure domain model for the smarthub home automation system.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, power state, error conventions
//! - Define **Devices** (lights, thermostats, …) and their variant-specific
//!   action and status rendering
//! - Contain all invariant enforcement (validated construction)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Operations return text instead of printing it; adapters decide where it goes.

pub mod error;
pub mod id;
pub mod state;

pub mod device;
