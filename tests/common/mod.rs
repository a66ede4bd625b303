//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use scoped_routes::{action, middleware, ControllerModule, Middleware, StaticRegistry};

/// Ordered log of events observed while a request runs the handler chain.
pub type EventLog = Arc<Mutex<Vec<&'static str>>>;

#[allow(dead_code)]
pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Middleware that records `tag` before delegating.
#[allow(dead_code)]
pub fn recording_middleware(log: EventLog, tag: &'static str) -> Middleware {
    middleware(move |req, next| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(tag);
            next.run(req).await
        }
    })
}

/// Registry fixture with controllers under a `controllers` base:
/// unscoped `posts` and `users`, scoped `blog/posts`, and `home` for roots.
#[allow(dead_code)]
pub fn blog_registry() -> StaticRegistry {
    StaticRegistry::new()
        .module(
            "controllers/homeController",
            ControllerModule::new().action("index", action(|_req| async { "home#index" })),
        )
        .module(
            "controllers/postsController",
            ControllerModule::new()
                .action("index", action(|_req| async { "posts#index" }))
                .action("create", action(|_req| async { "posts#create" })),
        )
        .module(
            "controllers/blog/postsController",
            ControllerModule::new().action("index", action(|_req| async { "blog/posts#index" })),
        )
}

/// Drive one request through the router and collect status + body text.
#[allow(dead_code)]
pub async fn send(router: Router, method: &str, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Initialize tracing output for a test run; safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
