//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or in-code value
//!     → loader.rs (parse & deserialize)
//!     → semantic checks (non-empty path/suffix)
//!     → RoutesConfig (validated)
//!     → captured by Routes at construction; restored verbatim on reset()
//! ```
//!
//! # Design Decisions
//! - Every field has a default so a minimal config works out of the box
//! - The controllers base path has no canonical value; the serde default is a
//!   convenience, and reset() restores whatever the builder was built with
//! - The action-oriented variant ("src/actions" + "Action" suffix) is the
//!   same schema with different values, not a separate mode

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::RoutesConfig;
