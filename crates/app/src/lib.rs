//! # smarthub-app
//!
//! Application layer — the [`Hub`](hub::Hub) use-case.
//!
//! ## Responsibilities
//! - Own every registered device, keyed by its id
//! - Route toggle requests to the right device and return what happened
//! - Aggregate the status blocks of all devices
//!
//! ## Dependency rule
//! Depends on `smarthub-domain` only. Never imports adapter crates and never
//! prints: adapters decide how outcomes reach the user.

pub mod hub;
