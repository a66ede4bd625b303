//! `"name#action"` reference parsing.

use crate::error::RouteError;

/// A parsed controller/action pair.
///
/// Invariant: both fields are non-empty when produced by [`parse`]. Values
/// constructed directly bypass validation; callers accept responsibility.
///
/// [`parse`]: ActionReference::parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReference {
    pub name: String,
    pub action: String,
}

impl ActionReference {
    /// Build a reference directly, without validation.
    pub fn new(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
        }
    }

    /// Parse a `"name#action"` string.
    ///
    /// Fails when the separator is absent, when either side is empty, or
    /// when more than one separator is present. The error carries the
    /// offending string.
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let Some((name, action)) = raw.split_once('#') else {
            return Err(RouteError::Format(raw.to_string()));
        };
        if name.is_empty() || action.is_empty() || action.contains('#') {
            return Err(RouteError::Format(raw.to_string()));
        }
        Ok(Self::new(name, action))
    }
}

/// A route declaration's target: either a raw string still to be parsed, or
/// an already-structured reference.
#[derive(Debug, Clone)]
pub enum ActionTarget {
    Literal(String),
    Reference(ActionReference),
}

impl ActionTarget {
    /// Parse a literal, or pass a structured reference through unchanged.
    pub fn into_reference(self) -> Result<ActionReference, RouteError> {
        match self {
            ActionTarget::Literal(raw) => ActionReference::parse(&raw),
            ActionTarget::Reference(reference) => Ok(reference),
        }
    }
}

impl From<&str> for ActionTarget {
    fn from(raw: &str) -> Self {
        ActionTarget::Literal(raw.to_string())
    }
}

impl From<String> for ActionTarget {
    fn from(raw: String) -> Self {
        ActionTarget::Literal(raw)
    }
}

impl From<ActionReference> for ActionTarget {
    fn from(reference: ActionReference) -> Self {
        ActionTarget::Reference(reference)
    }
}
