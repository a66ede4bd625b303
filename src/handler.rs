//! Handler and middleware value types.
//!
//! # Responsibilities
//! - Define the opaque handler shapes the rest of the crate passes around
//! - Lift plain async functions into those shapes
//!
//! # Design Decisions
//! - Terminal actions take the raw request; extractors (path params, query)
//!   are applied inside the action body, so a controller module is just a map
//!   of uniformly-typed values
//! - Middleware uses axum's `Next` delegation model so caller-supplied
//!   middleware and tower layers compose without adapters
//! - `Arc<dyn Fn>` rather than generics: chains are heterogeneous ordered
//!   lists built at registration time

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

/// Terminal route handler: consumes the request, produces the response.
pub type Action = Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Chainable middleware: may respond directly or delegate to `next`.
pub type Middleware =
    Arc<dyn Fn(Request<Body>, Next) -> BoxFuture<'static, Response> + Send + Sync>;

/// Lift an async function into an [`Action`].
pub fn action<F, Fut, R>(f: F) -> Action
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(move |req| {
        let fut = f(req);
        Box::pin(async move { fut.await.into_response() })
    })
}

/// Lift an async function into a [`Middleware`].
pub fn middleware<F, Fut, R>(f: F) -> Middleware
where
    F: Fn(Request<Body>, Next) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(move |req, next| {
        let fut = f(req, next);
        Box::pin(async move { fut.await.into_response() })
    })
}
