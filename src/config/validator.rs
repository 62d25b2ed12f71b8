//! Opt-in configuration validation: parameter names and route collisions.

use std::collections::HashMap;

use crate::config::{Operation, RouterConfig};
use crate::error::ConfigError;

fn valid_param_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Check a configuration against `base` before compiling it.
///
/// Compilation never calls this; callers that prefer fail-fast behavior over
/// the routing library's registration-time panics run it themselves.
pub fn validate<S>(base: &str, config: &RouterConfig<S>) -> Result<(), ConfigError> {
    for op in Operation::ALL {
        if let Some(endpoint) = config.endpoint(op) {
            if let Some(param) = endpoint.param() {
                if !valid_param_name(param) {
                    return Err(ConfigError::InvalidParam {
                        operation: op.as_str(),
                        name: param.to_string(),
                    });
                }
            }
        }
    }

    // Verbs are unique per operation except index/find (both GET), so only
    // those two can collide, but the check is written over the whole table.
    let mut seen: HashMap<(&'static str, String), &'static str> = HashMap::new();
    for op in Operation::ALL {
        if let Some(endpoint) = config.endpoint(op) {
            let verb: &'static str = match op {
                Operation::Index | Operation::Find => "GET",
                Operation::Create => "PUT",
                Operation::Update => "PATCH",
                Operation::Delete => "DELETE",
            };
            let path = endpoint.route_path(base);
            if let Some(first) = seen.insert((verb, path.clone()), op.as_str()) {
                return Err(ConfigError::DuplicateRoute {
                    verb,
                    path,
                    first,
                    second: op.as_str(),
                });
            }
        }
    }

    Ok(())
}
