//! Application-level constants.

/// Version string shown in the navigation header as `v<APP_VERSION>`.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
