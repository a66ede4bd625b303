//! The public route-registration surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{from_fn, Next};
use axum::routing::MethodRouter;
use axum::Router;

use crate::config::RoutesConfig;
use crate::error::RouteError;
use crate::handler::{Action, Middleware};
use crate::registry::ModuleResolver;
use crate::resolve::loader::load_action;
use crate::resolve::path::module_path;
use crate::resolve::reference::ActionTarget;
use crate::routing::scope::ScopeStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Per-declaration options.
#[derive(Default, Clone)]
pub struct RouteOptions {
    /// Middleware applied after the scope's inherited stack and before the
    /// action handler.
    pub with_middlewares: Vec<Middleware>,
}

impl RouteOptions {
    /// No per-route middleware.
    pub fn none() -> Self {
        Self::default()
    }

    /// Attach per-route (or, for `scope`, inherited) middleware.
    pub fn middlewares(with_middlewares: Vec<Middleware>) -> Self {
        Self { with_middlewares }
    }
}

/// Declarative route builder over an axum [`Router`].
///
/// All registration happens through `&mut self` in a single synchronous pass
/// before the finished router is handed to a server. Declarations made inside
/// a [`scope`] callback land on that scope's private router, which is nested
/// under `/<name>` on the parent when the callback finishes.
///
/// [`scope`]: Routes::scope
pub struct Routes {
    resolver: Arc<dyn ModuleResolver>,
    config: RoutesConfig,
    initial_config: RoutesConfig,
    stack: ScopeStack,
}

impl Routes {
    /// Build against `resolver` with the default configuration.
    pub fn new(resolver: impl ModuleResolver + 'static) -> Self {
        Self::with_config(resolver, RoutesConfig::default())
    }

    /// Build against `resolver` with an explicit configuration.
    ///
    /// The configuration is captured; [`reset`](Routes::reset) restores it.
    pub fn with_config(resolver: impl ModuleResolver + 'static, config: RoutesConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            initial_config: config.clone(),
            config,
            stack: ScopeStack::new(),
        }
    }

    /// Register a GET route at `/` for the current frame.
    pub fn root(
        &mut self,
        target: impl Into<ActionTarget>,
        options: RouteOptions,
    ) -> Result<(), RouteError> {
        self.register(Method::Get, "/", target.into(), options)
    }

    /// Register a GET route.
    pub fn get(
        &mut self,
        url_path: &str,
        target: impl Into<ActionTarget>,
        options: RouteOptions,
    ) -> Result<(), RouteError> {
        self.register(Method::Get, url_path, target.into(), options)
    }

    /// Register a POST route.
    pub fn post(
        &mut self,
        url_path: &str,
        target: impl Into<ActionTarget>,
        options: RouteOptions,
    ) -> Result<(), RouteError> {
        self.register(Method::Post, url_path, target.into(), options)
    }

    /// Declare a named scope.
    ///
    /// Runs `build` with a fresh private router installed as current; routes
    /// it declares resolve controllers under the scope's folder and inherit
    /// `options.with_middlewares`. The previous frame is restored
    /// unconditionally, even when `build` fails; on success the finished
    /// router is nested under `/<name>` on the restored parent. Nested scopes
    /// compose prefixes (`/admin/reports`).
    pub fn scope<F>(&mut self, name: &str, build: F, options: RouteOptions) -> Result<(), RouteError>
    where
        F: FnOnce(&mut Routes) -> Result<(), RouteError>,
    {
        // An empty name would make axum panic on the "/" mount prefix.
        if name.is_empty() {
            return Err(RouteError::InvalidScopeName(name.to_string()));
        }
        tracing::debug!(scope = name, depth = self.stack.depth(), "entering route scope");
        self.stack.enter(name, options.with_middlewares);
        let outcome = build(self);
        // Pop before propagating so a failed callback never leaks its frame.
        let frame = self.stack.exit();
        outcome?;

        // A reset() inside the callback clears the stack; nothing to mount.
        if let Some(frame) = frame {
            let child = frame.router.unwrap_or_default();
            let prefix = format!("/{}", frame.name);
            self.stack.with_current(|router| router.nest(&prefix, child));
            tracing::debug!(prefix = %prefix, "mounted route scope");
        }
        Ok(())
    }

    /// Discard all routes and scope state; restore the constructed-with
    /// configuration. Intended only between independent registration
    /// sessions, never inside a `scope` callback.
    pub fn reset(&mut self) {
        self.stack.reset();
        self.config = self.initial_config.clone();
        tracing::debug!("route builder reset");
    }

    /// Override the controllers base directory.
    pub fn set_controllers_path(&mut self, path: impl Into<String>) {
        self.config.controllers_path = path.into();
    }

    /// The active controllers base directory.
    pub fn controllers_path(&self) -> &str {
        &self.config.controllers_path
    }

    /// Handle to the current router: inside a `scope` callback this is the
    /// scope's private router, otherwise the lazily-created base router.
    ///
    /// axum routers clone cheaply; the clone is a snapshot of everything
    /// registered on that router so far.
    pub fn router(&mut self) -> Router {
        self.stack.router()
    }

    /// Consume the builder, yielding the finished base router.
    pub fn into_router(mut self) -> Router {
        self.stack.base_router()
    }

    fn register(
        &mut self,
        method: Method,
        url_path: &str,
        target: ActionTarget,
        options: RouteOptions,
    ) -> Result<(), RouteError> {
        let reference = target.into_reference()?;
        let module = module_path(&self.config, self.stack.current_scope(), &reference.name);
        let action = load_action(self.resolver.as_ref(), &module, &reference.action)?;

        // Hard ordering invariant: scope middleware, per-route middleware,
        // then the action.
        let mut chain = self.stack.current_middleware().to_vec();
        chain.extend(options.with_middlewares);

        let route_path = normalize_path(url_path);
        // axum panics on a second registration of the same method+path, so
        // refuse it here with an error instead.
        if !self.stack.try_claim(method, &route_path) {
            return Err(RouteError::DuplicateRoute {
                method: method.as_str().to_string(),
                path: route_path,
            });
        }
        let method_router = compose(method, &chain, action);
        self.stack
            .with_current(|router| router.route(&route_path, method_router));

        tracing::debug!(
            method = ?method,
            path = %route_path,
            module = %module,
            action = %reference.action,
            scope = self.stack.current_scope(),
            "route registered"
        );
        Ok(())
    }
}

/// Normalize a declared URL path.
///
/// Strips one leading separator so `"/get"` and `"get"` register identically,
/// and rewrites express-style `:param` segments to axum's `{param}` form.
fn normalize_path(url_path: &str) -> String {
    let trimmed = url_path.strip_prefix('/').unwrap_or(url_path);
    let segments: Vec<String> = trimmed
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(param) if !param.is_empty() => format!("{{{param}}}"),
            _ => segment.to_string(),
        })
        .collect();
    format!("/{}", segments.join("/"))
}

/// Build the method router for one route: terminal action wrapped by the
/// middleware chain.
fn compose(method: Method, chain: &[Middleware], action: Action) -> MethodRouter {
    let terminal = move |req: Request<Body>| {
        let action = action.clone();
        async move { action(req).await }
    };
    let method_router = match method {
        Method::Get => axum::routing::get(terminal),
        Method::Post => axum::routing::post(terminal),
    };

    // Tower layers execute outermost-first, so fold in reverse to preserve
    // the declared execution order.
    chain.iter().rev().fold(method_router, |router, mw| {
        let mw = mw.clone();
        router.layer(from_fn(move |req: Request<Body>, next: Next| {
            let mw = mw.clone();
            async move { mw(req, next).await }
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_one_leading_separator() {
        assert_eq!(normalize_path("get"), "/get");
        assert_eq!(normalize_path("/get"), "/get");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_normalize_rewrites_express_params() {
        assert_eq!(normalize_path("/users/:id"), "/users/{id}");
        assert_eq!(normalize_path("users/:id/posts/:post_id"), "/users/{id}/posts/{post_id}");
        // Already-axum syntax passes through untouched.
        assert_eq!(normalize_path("/users/{id}"), "/users/{id}");
        // A bare colon is not a parameter.
        assert_eq!(normalize_path("/odd/:"), "/odd/:");
    }
}
