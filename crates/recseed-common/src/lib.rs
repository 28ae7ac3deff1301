//! recseed common library
//!
//! Shared types and utilities for the recseed workspace:
//!
//! - **Types**: catalog property scopes/types and service regions
//! - **Logging**: tracing-based logging configuration and initialization
//!
//! # Example
//!
//! ```
//! use recseed_common::types::{PropertyScope, PropertyType};
//!
//! let scope = PropertyScope::Item;
//! assert_eq!(scope.as_path(), "items");
//! assert_eq!(PropertyType::Double.to_string(), "double");
//! ```

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{PropertyScope, PropertyType, Region};
