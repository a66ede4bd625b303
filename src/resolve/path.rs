//! Convention-based module path construction.

use crate::config::RoutesConfig;

/// Compute the module path for a controller name under the active scope.
///
/// Priority order:
/// 1. a name containing `/` is an explicit sub-path; no scope folder is
///    inserted,
/// 2. with an active scope, the scope name becomes a folder between the base
///    and the controller name,
/// 3. otherwise the name sits directly under the base.
///
/// The configured suffix is appended exactly once. The result is a registry
/// key; nothing checks whether a module actually lives there.
pub fn module_path(config: &RoutesConfig, scope: Option<&str>, name: &str) -> String {
    let base = &config.controllers_path;
    let suffix = &config.module_suffix;

    if name.contains('/') {
        return format!("{base}/{name}{suffix}");
    }
    match scope {
        Some(scope) => format!("{base}/{scope}/{name}{suffix}"),
        None => format!("{base}/{name}{suffix}"),
    }
}
