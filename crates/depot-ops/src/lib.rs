//! Ride-along evaluation engine for delivery depot operations.
//!
//! The library owns the question catalogs, per-session evaluation state, the
//! report generator, scoring, and the saved-report archive. Host surfaces (CLI
//! and HTTP) live in the `depot-ops-api` service crate.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
