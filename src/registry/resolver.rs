//! Module resolution: path string in, controller module out.

use std::collections::HashMap;

use thiserror::Error;

use crate::registry::module::ControllerModule;

/// Error produced by a resolver when a path cannot be resolved.
///
/// The message is the resolver's own diagnostic; callers treat it as opaque
/// and pass it through unchanged.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ResolveError(pub String);

/// Maps a module path string to a loaded controller module.
pub trait ModuleResolver: Send + Sync {
    /// Resolve `path` to a module, or fail with a diagnostic.
    fn resolve(&self, path: &str) -> Result<&ControllerModule, ResolveError>;
}

/// In-memory resolver backed by a statically registered module table.
#[derive(Default, Debug)]
pub struct StaticRegistry {
    modules: HashMap<String, ControllerModule>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its convention path, builder-style.
    pub fn module(mut self, path: impl Into<String>, module: ControllerModule) -> Self {
        self.modules.insert(path.into(), module);
        self
    }

    /// Register a module under its convention path.
    pub fn register(&mut self, path: impl Into<String>, module: ControllerModule) {
        self.modules.insert(path.into(), module);
    }
}

impl ModuleResolver for StaticRegistry {
    fn resolve(&self, path: &str) -> Result<&ControllerModule, ResolveError> {
        self.modules
            .get(path)
            .ok_or_else(|| ResolveError(format!("no module registered at `{}`", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::action;

    #[test]
    fn test_resolve_registered_module() {
        let registry = StaticRegistry::new().module(
            "controllers/postsController",
            ControllerModule::new().action("index", action(|_req| async { "ok" })),
        );

        assert!(registry.resolve("controllers/postsController").is_ok());
    }

    #[test]
    fn test_resolve_missing_module_names_path() {
        let registry = StaticRegistry::new();
        let err = registry.resolve("controllers/ghostController").unwrap_err();
        assert!(err.to_string().contains("controllers/ghostController"));
    }
}
