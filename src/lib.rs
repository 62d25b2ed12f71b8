//! crud-router: declarative CRUD endpoint configuration compiled to
//! mountable axum routers.
//!
//! Describe up to five CRUD-style endpoints (index, find, create, update,
//! delete) plus nested mounts, and [`compile`] produces a `Router` with the
//! verb bindings installed in a fixed, deterministic order:
//!
//! ```
//! use crud_router::{compile, Endpoint, RouterConfig};
//!
//! async fn list_users() -> &'static str { "[]" }
//! async fn show_user(axum::extract::Path(id): axum::extract::Path<String>) -> String { id }
//!
//! let router: axum::Router = compile(
//!     "/users",
//!     RouterConfig::new()
//!         .index(Endpoint::handler(list_users))
//!         .find(Endpoint::with_param("id", show_user)),
//! );
//! ```

pub mod config;
pub mod error;
pub mod path;
pub mod routes;

pub use config::{
    validate, Endpoint, EndpointConfig, EndpointOptions, Mount, Operation, RouterConfig,
    RouterConfiguration,
};
pub use error::ConfigError;
pub use routes::{compile, compile_from_configuration};
