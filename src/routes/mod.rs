//! The route compiler: turns a declarative configuration into a mountable
//! axum `Router`.

use axum::Router;

use crate::config::{Operation, RouterConfig, RouterConfiguration};

/// Compile `config` into a router scoped to `base`.
///
/// Endpoints are registered in the fixed operation order (index, find,
/// create, update, delete), then mounts are attached in list order. The
/// sequence is observable through the debug events emitted per registration.
///
/// Path parameters captured by a parent router stay visible to extractors in
/// this router once it is nested, so a mount under `/users/:userId` can read
/// `userId` from its own handlers.
///
/// No validation is performed here; a malformed path pattern or an
/// overlapping method route propagates as a panic from the routing library
/// at registration time. Run [`crate::config::validate`] first to get a
/// typed error instead.
pub fn compile<S>(base: &str, mut config: RouterConfig<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new();

    for op in Operation::ALL {
        if let Some(endpoint) = config.take(op) {
            let path = endpoint.route_path(base);
            tracing::debug!(operation = op.as_str(), verb = %op.method(), path = %path, "register route");
            router = router.route(&path, (endpoint.install)(op.method_filter()));
        }
    }

    for mount in config.mounts {
        let at = mount.mount_path(base);
        tracing::debug!(path = %at, "attach router");
        // axum forbids nesting at the root path; merging is its equivalent.
        router = if at == "/" {
            router.merge(mount.router)
        } else {
            router.nest(&at, mount.router)
        };
    }

    router
}

/// Compile from the object-shaped configuration carrying the base path
/// in-band. Flattens the descriptors and delegates to [`compile`].
pub fn compile_from_configuration<S>(config: RouterConfiguration<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let (endpoint, config) = config.flatten();
    compile(&endpoint, config)
}
