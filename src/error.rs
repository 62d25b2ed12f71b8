//! Typed configuration errors.

use thiserror::Error;

/// Problems detected by [`crate::config::validate`] before any route is
/// registered. Compilation itself does not validate; whatever the routing
/// library raises for a malformed pattern propagates unchanged.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid parameter name '{name}' for {operation}")]
    InvalidParam { operation: &'static str, name: String },
    #[error("duplicate route: {verb} {path} registered by both {first} and {second}")]
    DuplicateRoute {
        verb: &'static str,
        path: String,
        first: &'static str,
        second: &'static str,
    },
}
