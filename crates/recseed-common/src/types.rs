//! Shared catalog domain types
//!
//! Property scopes/types mirror the remote catalog's schema vocabulary; regions
//! select the API endpoint the catalog database is hosted in.

use serde::{Deserialize, Serialize};

/// Which side of the catalog a property (or record) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyScope {
    /// Catalog items (tracks, in this seeder's case)
    Item,
    /// Catalog users
    User,
}

impl PropertyScope {
    /// URL path segment for this scope (`items` or `users`).
    pub fn as_path(self) -> &'static str {
        match self {
            PropertyScope::Item => "items",
            PropertyScope::User => "users",
        }
    }
}

impl std::fmt::Display for PropertyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyScope::Item => write!(f, "item"),
            PropertyScope::User => write!(f, "user"),
        }
    }
}

/// Value type of a catalog property.
///
/// The full vocabulary the remote service accepts; the seeder itself only
/// declares `string`, `int` and `double` properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    String,
    Int,
    Double,
    Boolean,
    Timestamp,
    Set,
    Image,
    ImageList,
}

impl PropertyType {
    /// Wire name of the type, as sent in the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Int => "int",
            PropertyType::Double => "double",
            PropertyType::Boolean => "boolean",
            PropertyType::Timestamp => "timestamp",
            PropertyType::Set => "set",
            PropertyType::Image => "image",
            PropertyType::ImageList => "imageList",
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "string" => Ok(PropertyType::String),
            "int" => Ok(PropertyType::Int),
            "double" => Ok(PropertyType::Double),
            "boolean" => Ok(PropertyType::Boolean),
            "timestamp" => Ok(PropertyType::Timestamp),
            "set" => Ok(PropertyType::Set),
            "image" => Ok(PropertyType::Image),
            "imageList" => Ok(PropertyType::ImageList),
            _ => Err(anyhow::anyhow!("Invalid property type: {}", s)),
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hosting region of the catalog database.
///
/// Each region maps to a fixed API base URL; an explicit URL override in the
/// configuration takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    #[default]
    EuWest,
    UsWest,
    ApSe,
    CaEast,
}

impl Region {
    /// API base URL for this region.
    pub fn base_url(self) -> &'static str {
        match self {
            Region::EuWest => "https://api-eu-west.recsphere.com",
            Region::UsWest => "https://api-us-west.recsphere.com",
            Region::ApSe => "https://api-ap-se.recsphere.com",
            Region::CaEast => "https://api-ca-east.recsphere.com",
        }
    }
}

impl std::str::FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eu-west" | "eu_west" | "euwest" => Ok(Region::EuWest),
            "us-west" | "us_west" | "uswest" => Ok(Region::UsWest),
            "ap-se" | "ap_se" | "apse" => Ok(Region::ApSe),
            "ca-east" | "ca_east" | "caeast" => Ok(Region::CaEast),
            _ => Err(anyhow::anyhow!("Invalid region: {}", s)),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::EuWest => write!(f, "eu-west"),
            Region::UsWest => write!(f, "us-west"),
            Region::ApSe => write!(f, "ap-se"),
            Region::CaEast => write!(f, "ca-east"),
        }
    }
}
