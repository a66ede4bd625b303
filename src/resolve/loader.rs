//! Action loading: resolver lookup plus entry-point validation.

use crate::error::RouteError;
use crate::handler::Action;
use crate::registry::ModuleResolver;

/// Load the handler for `action` from the module at `path`.
///
/// The resolver's own diagnostic is passed through unchanged when the module
/// cannot be resolved. The returned handler is the registered value itself,
/// not a wrapper.
pub fn load_action(
    resolver: &dyn ModuleResolver,
    path: &str,
    action: &str,
) -> Result<Action, RouteError> {
    let module = resolver.resolve(path).map_err(|source| RouteError::ModuleLoad {
        path: path.to_string(),
        source,
    })?;

    module
        .get(action)
        .cloned()
        .ok_or_else(|| RouteError::ActionNotFound {
            path: path.to_string(),
            action: action.to_string(),
        })
}
