//! A controller module: named entry points mapped to handlers.

use std::collections::HashMap;

use crate::handler::Action;

/// The loaded form of one controller module.
///
/// Mirrors a module file that exports named entry points: each entry is an
/// action name mapped to its handler.
#[derive(Default, Clone)]
pub struct ControllerModule {
    actions: HashMap<String, Action>,
}

impl ControllerModule {
    /// Create an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named entry point, builder-style.
    pub fn action(mut self, name: impl Into<String>, handler: Action) -> Self {
        self.actions.insert(name.into(), handler);
        self
    }

    /// Look up an entry point by name.
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.actions.get(name)
    }
}

impl std::fmt::Debug for ControllerModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ControllerModule")
            .field("actions", &names)
            .finish()
    }
}
