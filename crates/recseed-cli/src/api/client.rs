//! HTTP client for the catalog API
//!
//! One request per operation, strictly sequential, no retries: the seeder's
//! only recovery path is the 409 Conflict mapped to [`SeedError::Conflict`].

use crate::api::{endpoints, types::ErrorResponse, types::PropertyInfo};
use crate::config::Config;
use crate::error::{Result, SeedError};
use recseed_common::types::{PropertyScope, PropertyType};
use reqwest::{Client, Response, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::debug;

/// Default per-request timeout when the client is built without a [`Config`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API client for the remote catalog
pub struct CatalogClient {
    client: Client,
    base_url: String,
    database_id: String,
    private_token: String,
}

impl CatalogClient {
    /// Create a new catalog client with the default timeout
    pub fn new(
        base_url: impl Into<String>,
        database_id: impl Into<String>,
        private_token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_timeout(
            base_url,
            database_id,
            private_token,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a new catalog client with an explicit timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        database_id: impl Into<String>,
        private_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            database_id: database_id.into(),
            private_token: private_token.into(),
        })
    }

    /// Create from a loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(
            config.base_url(),
            config.database_id.clone(),
            config.private_token.clone(),
            config.timeout,
        )
    }

    /// Declare a property on the catalog.
    ///
    /// The create API is not idempotent: redeclaring a property yields a 409
    /// Conflict, surfaced here as [`SeedError::Conflict`]. The schema
    /// synchronizer treats that as success.
    pub async fn create_property(
        &self,
        scope: PropertyScope,
        name: &str,
        property_type: PropertyType,
    ) -> Result<()> {
        let url = endpoints::property_url(&self.base_url, &self.database_id, scope, name);

        debug!(%scope, name, r#type = %property_type, "Creating property");

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.private_token)
            .query(&[("type", property_type.as_str())])
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    /// List the properties declared for a scope.
    pub async fn list_properties(&self, scope: PropertyScope) -> Result<Vec<PropertyInfo>> {
        let url = endpoints::properties_url(&self.base_url, &self.database_id, scope);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.private_token)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Upsert property values on a single entity.
    ///
    /// With `cascade_create` the entity is created if absent, so the call is
    /// safe to repeat with the same id.
    pub async fn set_values(
        &self,
        scope: PropertyScope,
        id: &str,
        values: &Map<String, Value>,
        cascade_create: bool,
    ) -> Result<()> {
        let url = endpoints::values_url(&self.base_url, &self.database_id, scope, id);

        debug!(%scope, id, cascade_create, "Setting values");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.private_token)
            .query(&[("cascadeCreate", if cascade_create { "true" } else { "false" })])
            .json(values)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the database id
    pub fn database_id(&self) -> &str {
        &self.database_id
    }
}

/// Map a non-success response to the error taxonomy.
///
/// 409 becomes the recoverable [`SeedError::Conflict`]; everything else is
/// [`SeedError::Api`] with the service's message when one can be parsed out
/// of the body.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorResponse>(&body).ok())
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    if status == StatusCode::CONFLICT {
        Err(SeedError::Conflict(message))
    } else {
        Err(SeedError::api(status.as_u16(), message))
    }
}
