//! Minimal blog-style wiring: a controller registry, a couple of scoped
//! routes, and an axum server.
//!
//! Run with `cargo run --example blog`, then try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/users/42
//!   curl http://localhost:3000/admin/reports            (401)
//!   curl -H 'x-demo-token: letmein' http://localhost:3000/admin/reports

use axum::body::Body;
use axum::extract::{FromRequestParts, Path};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;

use scoped_routes::{
    action, middleware, ControllerModule, RouteOptions, Routes, StaticRegistry,
};

fn registry() -> StaticRegistry {
    StaticRegistry::new()
        .module(
            "src/controllers/homeController",
            ControllerModule::new().action("index", action(|_req| async { "welcome\n" })),
        )
        .module(
            "src/controllers/usersController",
            ControllerModule::new().action(
                "show",
                action(|req: Request<Body>| async move {
                    let (mut parts, _body) = req.into_parts();
                    match Path::<String>::from_request_parts(&mut parts, &()).await {
                        Ok(Path(id)) => format!("user {id}\n").into_response(),
                        Err(rejection) => rejection.into_response(),
                    }
                }),
            ),
        )
        .module(
            "src/controllers/admin/reportsController",
            ControllerModule::new().action("index", action(|_req| async { "quarterly numbers\n" })),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let require_token = middleware(|req, next| async move {
        if req.headers().contains_key("x-demo-token") {
            next.run(req).await
        } else {
            StatusCode::UNAUTHORIZED.into_response()
        }
    });

    let mut routes = Routes::new(registry());
    routes.root("home#index", RouteOptions::none())?;
    routes.get("/users/:id", "users#show", RouteOptions::none())?;
    routes.scope(
        "admin",
        |r| r.get("/reports", "reports#index", RouteOptions::none()),
        RouteOptions::middlewares(vec![require_token]),
    )?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    println!("listening on http://127.0.0.1:3000");
    axum::serve(listener, routes.into_router()).await?;

    Ok(())
}
