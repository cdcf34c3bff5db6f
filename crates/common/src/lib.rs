//! Shared utilities, configuration, and error handling for Folio
//!
//! This crate provides common functionality used across the Folio application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Shared state machine error types

pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::StateError;
