//! API request and response types
//!
//! Matches the catalog service's wire structure.

use recseed_common::types::PropertyType;
use serde::{Deserialize, Serialize};

/// Error body returned by the catalog on non-success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "statusCode")]
    pub status_code: Option<u16>,
    pub message: Option<String>,
}

/// A property as reported by the property listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_deserialization() {
        let body = r#"{"statusCode": 409, "message": "Property already exists"}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status_code, Some(409));
        assert_eq!(parsed.message.as_deref(), Some("Property already exists"));

        // Both fields are optional; an empty body object still parses
        let parsed: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.status_code.is_none());
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_property_info_deserialization() {
        let body = r#"[{"name": "Danceability", "type": "double"}]"#;
        let parsed: Vec<PropertyInfo> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Danceability");
        assert_eq!(parsed[0].property_type, PropertyType::Double);
    }
}
