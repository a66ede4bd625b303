//! Scope frame stack.
//!
//! Tracks the router, scope name, and inherited middleware that route
//! declarations register against. The base frame (no scope) owns the root
//! router and is created lazily; named frames exist only while their scope
//! callback runs.

use std::collections::HashSet;

use axum::Router;

use crate::handler::Middleware;
use crate::routing::builder::Method;

/// One active scope: its name, inherited middleware, and private router.
pub(crate) struct ScopeFrame {
    pub name: String,
    pub middleware: Vec<Middleware>,
    // Option because axum Router methods consume self; taken and put back.
    pub router: Option<Router>,
    // Method+path pairs registered on this frame's router; axum panics on
    // duplicates, so they are refused before reaching it.
    claimed: HashSet<(Method, String)>,
}

/// LIFO stack of scope frames over a lazily-created base router.
///
/// State machine: BASE when no frames are pushed, IN_SCOPE(n) at depth n.
/// `enter` pushes, `exit` pops, `reset` forces BASE with a fresh router.
#[derive(Default)]
pub(crate) struct ScopeStack {
    base: Option<Router>,
    base_claimed: HashSet<(Method, String)>,
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Name of the innermost active scope, if any.
    pub fn current_scope(&self) -> Option<&str> {
        self.frames.last().map(|frame| frame.name.as_str())
    }

    /// Middleware inherited by routes declared in the current frame.
    ///
    /// Only the innermost frame's stack; ancestor middleware is not
    /// accumulated here.
    pub fn current_middleware(&self) -> &[Middleware] {
        self.frames
            .last()
            .map(|frame| frame.middleware.as_slice())
            .unwrap_or(&[])
    }

    /// Push a new frame with a fresh private router.
    pub fn enter(&mut self, name: impl Into<String>, middleware: Vec<Middleware>) {
        self.frames.push(ScopeFrame {
            name: name.into(),
            middleware,
            router: Some(Router::new()),
            claimed: HashSet::new(),
        });
    }

    /// Record a method+path registration on the current frame.
    ///
    /// Returns false when that pair is already taken there; each frame's
    /// private router is its own namespace, so the same pair may appear in
    /// sibling or nested scopes.
    pub fn try_claim(&mut self, method: Method, path: &str) -> bool {
        let claimed = match self.frames.last_mut() {
            Some(frame) => &mut frame.claimed,
            None => &mut self.base_claimed,
        };
        claimed.insert((method, path.to_string()))
    }

    /// Pop the innermost frame, restoring the enclosing one.
    ///
    /// Returns the finished frame so the caller can mount its router.
    pub fn exit(&mut self) -> Option<ScopeFrame> {
        self.frames.pop()
    }

    /// Apply a consume-and-return transformation to the current router.
    pub fn with_current(&mut self, f: impl FnOnce(Router) -> Router) {
        match self.frames.last_mut() {
            Some(frame) => {
                let router = frame.router.take().unwrap_or_default();
                frame.router = Some(f(router));
            }
            None => {
                let router = self.base.take().unwrap_or_default();
                self.base = Some(f(router));
            }
        }
    }

    /// Clone of the current router: the innermost frame's private router, or
    /// the base router (created lazily) when no scope is active.
    pub fn router(&mut self) -> Router {
        match self.frames.last_mut() {
            Some(frame) => frame.router.get_or_insert_with(Router::new).clone(),
            None => self.base.get_or_insert_with(Router::new).clone(),
        }
    }

    /// Clone of the base router regardless of active frames, created lazily.
    pub fn base_router(&mut self) -> Router {
        self.base.get_or_insert_with(Router::new).clone()
    }

    /// Discard all state: frames, base router, and claimed routes.
    pub fn reset(&mut self) {
        self.base = None;
        self.base_claimed.clear();
        self.frames.clear();
    }
}
