//! Action resolution subsystem.
//!
//! # Data Flow
//! ```text
//! "posts#show" (route declaration)
//!     → reference.rs (parse into { name, action })
//!     → path.rs (convention path: base [+ scope] + name + suffix)
//!     → loader.rs (resolver lookup + entry-point lookup)
//!     → Return: Action handler or RouteError
//! ```
//!
//! # Design Decisions
//! - Resolution is purely textual until the final lookup; no existence checks
//!   happen during path construction
//! - A `/` inside the name is an explicit sub-path and bypasses the active
//!   scope's folder, so scoped code can still reach foreign controllers
//! - Errors surface at the route declaration that caused them

pub mod loader;
pub mod path;
pub mod reference;
