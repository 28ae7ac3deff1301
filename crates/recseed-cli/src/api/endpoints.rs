//! API endpoint URL builders
//!
//! Helper functions to construct catalog API endpoint URLs. Every path is
//! rooted at the database id.

use recseed_common::types::PropertyScope;

/// Build the URL for a single property (create / delete)
pub fn property_url(base_url: &str, database_id: &str, scope: PropertyScope, name: &str) -> String {
    format!(
        "{}/{}/{}/properties/{}",
        base_url,
        database_id,
        scope.as_path(),
        name
    )
}

/// Build the URL for the property listing of a scope
pub fn properties_url(base_url: &str, database_id: &str, scope: PropertyScope) -> String {
    format!("{}/{}/{}/properties", base_url, database_id, scope.as_path())
}

/// Build the URL for setting values on a single entity
pub fn values_url(base_url: &str, database_id: &str, scope: PropertyScope, id: &str) -> String {
    format!("{}/{}/{}/{}", base_url, database_id, scope.as_path(), id)
}
