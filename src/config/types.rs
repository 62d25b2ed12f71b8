//! Configuration types: the canonical descriptor shapes consumed by the
//! compiler plus the ergonomic object shape flattened onto them.

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::path;

/// The closed set of CRUD operations a router configuration can bind.
///
/// Each operation maps to exactly one HTTP verb; the table is an invariant
/// and never configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Index,
    Find,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// The fixed registration order. Routes are always installed in this
    /// sequence regardless of how the configuration was built.
    pub const ALL: [Operation; 5] = [
        Operation::Index,
        Operation::Find,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// The verb this operation registers under.
    pub fn method(self) -> Method {
        match self {
            Operation::Index | Operation::Find => Method::GET,
            Operation::Create => Method::PUT,
            Operation::Update => Method::PATCH,
            Operation::Delete => Method::DELETE,
        }
    }

    pub(crate) fn method_filter(self) -> MethodFilter {
        match self {
            Operation::Index | Operation::Find => MethodFilter::GET,
            Operation::Create => MethodFilter::PUT,
            Operation::Update => MethodFilter::PATCH,
            Operation::Delete => MethodFilter::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Index => "index",
            Operation::Find => "find",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Deferred handler registration: the verb is chosen by the compiler from
/// the operation table, so the handler is captured behind a closure that
/// accepts the filter at install time.
pub(crate) type BoxedInstall<S> = Box<dyn FnOnce(MethodFilter) -> MethodRouter<S> + Send + 'static>;

/// One endpoint descriptor: an optional path parameter name plus a handler.
///
/// The descriptor cannot exist without a handler, so a present operation
/// with a missing callback is unrepresentable.
pub struct Endpoint<S = ()> {
    pub(crate) param: Option<String>,
    pub(crate) install: BoxedInstall<S>,
}

impl<S> Endpoint<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Endpoint registered at the base path unchanged.
    pub fn handler<H, T>(handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Endpoint {
            param: None,
            install: Box::new(move |filter| on(filter, handler)),
        }
    }

    /// Endpoint registered at the base path joined with a `:name` segment.
    /// An empty name behaves as if no parameter was given.
    pub fn with_param<H, T>(param: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Endpoint {
            param: Some(param.into()),
            install: Box::new(move |filter| on(filter, handler)),
        }
    }
}

impl<S> Endpoint<S> {
    /// Effective parameter name, with empty strings treated as absent.
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref().filter(|p| !p.is_empty())
    }

    /// Path this endpoint registers at under `base`.
    pub fn route_path(&self, base: &str) -> String {
        match self.param() {
            Some(p) => path::join(base, &format!(":{p}")),
            None => path::normalize(base),
        }
    }
}

/// One mount descriptor: an optional sub-path plus the sub-router to attach
/// under the base path.
pub struct Mount<S = ()> {
    pub(crate) path: Option<String>,
    pub(crate) router: Router<S>,
}

impl<S> Mount<S> {
    /// Mount `router` under `base` joined with `subpath`.
    pub fn at(subpath: impl Into<String>, router: Router<S>) -> Self {
        Mount {
            path: Some(subpath.into()),
            router,
        }
    }

    /// Mount `router` at the base path itself.
    pub fn root(router: Router<S>) -> Self {
        Mount { path: None, router }
    }

    /// Effective sub-path, with empty strings treated as absent.
    pub fn subpath(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Path this descriptor mounts at under `base`.
    pub fn mount_path(&self, base: &str) -> String {
        match self.subpath() {
            Some(p) => path::join(base, p),
            None => path::normalize(base),
        }
    }
}

/// Aggregate configuration: at most one endpoint per operation plus an
/// ordered list of mounts. Consumed once by [`crate::routes::compile`].
pub struct RouterConfig<S = ()> {
    pub index: Option<Endpoint<S>>,
    pub find: Option<Endpoint<S>>,
    pub create: Option<Endpoint<S>>,
    pub update: Option<Endpoint<S>>,
    pub delete: Option<Endpoint<S>>,
    pub mounts: Vec<Mount<S>>,
}

impl<S> Default for RouterConfig<S> {
    fn default() -> Self {
        RouterConfig {
            index: None,
            find: None,
            create: None,
            update: None,
            delete: None,
            mounts: Vec::new(),
        }
    }
}

impl<S> RouterConfig<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(mut self, endpoint: Endpoint<S>) -> Self {
        self.index = Some(endpoint);
        self
    }

    pub fn find(mut self, endpoint: Endpoint<S>) -> Self {
        self.find = Some(endpoint);
        self
    }

    pub fn create(mut self, endpoint: Endpoint<S>) -> Self {
        self.create = Some(endpoint);
        self
    }

    pub fn update(mut self, endpoint: Endpoint<S>) -> Self {
        self.update = Some(endpoint);
        self
    }

    pub fn delete(mut self, endpoint: Endpoint<S>) -> Self {
        self.delete = Some(endpoint);
        self
    }

    pub fn mount(mut self, mount: Mount<S>) -> Self {
        self.mounts.push(mount);
        self
    }

    pub fn endpoint(&self, op: Operation) -> Option<&Endpoint<S>> {
        match op {
            Operation::Index => self.index.as_ref(),
            Operation::Find => self.find.as_ref(),
            Operation::Create => self.create.as_ref(),
            Operation::Update => self.update.as_ref(),
            Operation::Delete => self.delete.as_ref(),
        }
    }

    pub(crate) fn take(&mut self, op: Operation) -> Option<Endpoint<S>> {
        match op {
            Operation::Index => self.index.take(),
            Operation::Find => self.find.take(),
            Operation::Create => self.create.take(),
            Operation::Update => self.update.take(),
            Operation::Delete => self.delete.take(),
        }
    }
}

/// Extra per-endpoint settings for the object-shaped configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EndpointOptions {
    #[serde(default)]
    pub param: Option<String>,
}

/// Object-shaped endpoint descriptor: `{ callback, options? }`. Flattens to
/// [`Endpoint`] with no semantics of its own.
pub struct EndpointConfig<S = ()> {
    pub(crate) callback: BoxedInstall<S>,
    pub options: Option<EndpointOptions>,
}

impl<S> EndpointConfig<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new<H, T>(callback: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        EndpointConfig {
            callback: Box::new(move |filter| on(filter, callback)),
            options: None,
        }
    }

    pub fn with_options(mut self, options: EndpointOptions) -> Self {
        self.options = Some(options);
        self
    }
}

impl<S> EndpointConfig<S> {
    pub(crate) fn into_endpoint(self) -> Endpoint<S> {
        Endpoint {
            param: self.options.and_then(|o| o.param),
            install: self.callback,
        }
    }
}

/// Object-shaped router configuration carrying the base path in-band.
pub struct RouterConfiguration<S = ()> {
    pub endpoint: String,
    pub index: Option<EndpointConfig<S>>,
    pub find: Option<EndpointConfig<S>>,
    pub create: Option<EndpointConfig<S>>,
    pub update: Option<EndpointConfig<S>>,
    pub delete: Option<EndpointConfig<S>>,
    pub mounts: Vec<Mount<S>>,
}

impl<S> RouterConfiguration<S> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RouterConfiguration {
            endpoint: endpoint.into(),
            index: None,
            find: None,
            create: None,
            update: None,
            delete: None,
            mounts: Vec::new(),
        }
    }

    pub fn index(mut self, endpoint: EndpointConfig<S>) -> Self {
        self.index = Some(endpoint);
        self
    }

    pub fn find(mut self, endpoint: EndpointConfig<S>) -> Self {
        self.find = Some(endpoint);
        self
    }

    pub fn create(mut self, endpoint: EndpointConfig<S>) -> Self {
        self.create = Some(endpoint);
        self
    }

    pub fn update(mut self, endpoint: EndpointConfig<S>) -> Self {
        self.update = Some(endpoint);
        self
    }

    pub fn delete(mut self, endpoint: EndpointConfig<S>) -> Self {
        self.delete = Some(endpoint);
        self
    }

    pub fn mount(mut self, mount: Mount<S>) -> Self {
        self.mounts.push(mount);
        self
    }

    /// Pure flattening into the canonical shape; delegates all routing
    /// semantics to [`crate::routes::compile`].
    pub(crate) fn flatten(self) -> (String, RouterConfig<S>) {
        let config = RouterConfig {
            index: self.index.map(EndpointConfig::into_endpoint),
            find: self.find.map(EndpointConfig::into_endpoint),
            create: self.create.map(EndpointConfig::into_endpoint),
            update: self.update.map(EndpointConfig::into_endpoint),
            delete: self.delete.map(EndpointConfig::into_endpoint),
            mounts: self.mounts,
        };
        (self.endpoint, config)
    }
}
