//! Configuration for the recseed CLI
//!
//! Credentials and endpoint selection come from the environment (a local
//! `.env` file is loaded by `main` before parsing). The database id and
//! private token have no defaults; everything else does.

use crate::error::{Result, SeedError};
use recseed_common::types::Region;
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default timeout for API requests in seconds.
/// Can be overridden via the RECSEED_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog database identifier (first path segment of every request)
    pub database_id: String,

    /// Private API token
    pub private_token: String,

    /// Hosting region of the database; selects the API base URL
    pub region: Region,

    /// Explicit API base URL; takes precedence over the region
    pub api_url: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `RECSEED_DATABASE_ID`: catalog database id (required)
    /// - `RECSEED_PRIVATE_TOKEN`: private API token (required)
    /// - `RECSEED_REGION`: hosting region (eu-west, us-west, ap-se, ca-east)
    /// - `RECSEED_API_URL`: explicit base URL, overrides the region
    /// - `RECSEED_API_TIMEOUT_SECS`: per-request timeout in seconds
    pub fn from_env() -> Result<Self> {
        let database_id = std::env::var("RECSEED_DATABASE_ID")
            .map_err(|_| SeedError::config("RECSEED_DATABASE_ID is not set"))?;

        let private_token = std::env::var("RECSEED_PRIVATE_TOKEN")
            .map_err(|_| SeedError::config("RECSEED_PRIVATE_TOKEN is not set"))?;

        let region = match std::env::var("RECSEED_REGION") {
            Ok(value) => value
                .parse()
                .map_err(|_| SeedError::config(format!("Invalid RECSEED_REGION: {}", value)))?,
            Err(_) => Region::default(),
        };

        let api_url = std::env::var("RECSEED_API_URL").ok();

        let timeout_secs = std::env::var("RECSEED_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        Ok(Self {
            database_id,
            private_token,
            region,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Effective API base URL (explicit override, or the region's endpoint)
    pub fn base_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(self.region.base_url())
    }
}
