//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Collection file patched when no path is given
pub const DEFAULT_COLLECTION_PATH: &str = "postman/DocuFlow.postman_collection.json";

/// Name of the existing item the new folders are inserted in front of
pub const ANCHOR_NAME: &str = "Health Check";

/// Host token substituted by Postman at send time
pub const BASE_URL_VAR: &str = "{{baseUrl}}";

/// Application name
pub const APP_NAME: &str = "collection-patcher";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
