//! Schema synchronizer
//!
//! Ensures the catalog properties the seeder writes to exist before any
//! record is upserted. The remote create API is not idempotent, so this
//! module shims idempotency on top: a 409 Conflict counts as success.

use crate::api::CatalogClient;
use crate::error::{Result, SeedError};
use recseed_common::types::{PropertyScope, PropertyType};
use tracing::{debug, info};

/// Item-scoped properties populated from the track CSV.
pub const ITEM_PROPERTIES: &[(&str, PropertyType)] = &[
    ("Song", PropertyType::String),
    ("Artist", PropertyType::String),
    ("Album", PropertyType::String),
    ("Popularity", PropertyType::Int),
    ("Danceability", PropertyType::Double),
];

/// User-scoped properties populated by the user generator.
pub const USER_PROPERTIES: &[(&str, PropertyType)] = &[
    ("FirstName", PropertyType::String),
    ("LastName", PropertyType::String),
    ("Email", PropertyType::String),
    ("Age", PropertyType::Int),
    ("Country", PropertyType::String),
];

/// Outcome of an idempotent property declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The property was newly created
    Created,
    /// The property was already declared; treated as success
    AlreadyExists,
}

/// Declare a property, treating "already exists" as success.
///
/// Any error other than the 409 Conflict propagates and aborts the run.
pub async fn ensure_property(
    client: &CatalogClient,
    scope: PropertyScope,
    name: &str,
    property_type: PropertyType,
) -> Result<EnsureOutcome> {
    match client.create_property(scope, name, property_type).await {
        Ok(()) => {
            info!(%scope, name, r#type = %property_type, "Property created");
            Ok(EnsureOutcome::Created)
        },
        Err(SeedError::Conflict(message)) => {
            debug!(%scope, name, message, "Property already exists");
            Ok(EnsureOutcome::AlreadyExists)
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> CatalogClient {
        CatalogClient::new(base_url, "db-test", "secret-token").unwrap()
    }

    #[tokio::test]
    async fn test_ensure_property_created() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/db-test/items/properties/Song"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!("ok")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let outcome = ensure_property(&client, PropertyScope::Item, "Song", PropertyType::String)
            .await
            .unwrap();
        assert_eq!(outcome, EnsureOutcome::Created);
    }

    #[tokio::test]
    async fn test_ensure_property_is_idempotent() {
        let server = MockServer::start().await;

        // First declaration succeeds, the second conflicts; both calls must
        // come back Ok.
        Mock::given(method("PUT"))
            .and(path("/db-test/items/properties/Popularity"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!("ok")))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/db-test/items/properties/Popularity"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "statusCode": 409,
                "message": "Property Popularity already exists"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());

        let first = ensure_property(&client, PropertyScope::Item, "Popularity", PropertyType::Int)
            .await
            .unwrap();
        let second = ensure_property(&client, PropertyScope::Item, "Popularity", PropertyType::Int)
            .await
            .unwrap();

        assert_eq!(first, EnsureOutcome::Created);
        assert_eq!(second, EnsureOutcome::AlreadyExists);
    }

    #[tokio::test]
    async fn test_ensure_property_propagates_other_errors() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "statusCode": 403,
                "message": "Forbidden"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = ensure_property(&client, PropertyScope::User, "Email", PropertyType::String)
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Api { status: 403, .. }));
    }

    #[test]
    fn test_declared_property_sets() {
        assert_eq!(ITEM_PROPERTIES.len(), 5);
        assert_eq!(USER_PROPERTIES.len(), 5);
        assert!(ITEM_PROPERTIES
            .iter()
            .any(|&(name, ty)| name == "Danceability" && ty == PropertyType::Double));
        assert!(USER_PROPERTIES
            .iter()
            .any(|&(name, ty)| name == "Age" && ty == PropertyType::Int));
    }
}
