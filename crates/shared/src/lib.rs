//! # Propkit Shared
//!
//! Common types used across the workspace: the error enum, the `Result`
//! alias, and the access-gate configuration.

pub mod config;
pub mod error;

pub use config::GateConfig;
pub use error::{ModelError, Result};
