//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Service-specific settings
//! (mail relay, project store) live in their own crates; this struct
//! carries the site-wide identity and runtime options.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name used as the fixed recipient of contact messages
    pub site_owner: String,

    /// Address contact messages are delivered to (also the mailto target)
    pub contact_email: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            site_owner: env::var("SITE_OWNER").unwrap_or_else(|_| "Jack Ooi".to_string()),
            contact_email: env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "thooi998@gmail.com".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug".to_string()),
        };

        Ok(config)
    }
}
