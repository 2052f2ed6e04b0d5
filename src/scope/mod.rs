pub mod hierarchy;

pub use hierarchy::HIGH_SCOPES;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopeError};

/// The five fixture scopes, ordered from broadest to narrowest.
///
/// Ordering follows declaration order, so `Scope::Session < Scope::Function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Session,
    Package,
    Module,
    Class,
    Function,
}

impl Scope {
    /// Every scope in broad-to-narrow order.
    pub const ALL: [Scope; 5] = [
        Scope::Session,
        Scope::Package,
        Scope::Module,
        Scope::Class,
        Scope::Function,
    ];

    /// Canonical lowercase label, the only external representation.
    pub fn label(self) -> &'static str {
        match self {
            Scope::Session => "session",
            Scope::Package => "package",
            Scope::Module => "module",
            Scope::Class => "class",
            Scope::Function => "function",
        }
    }

    /// Convert a scope name typed by a user into a `Scope`.
    ///
    /// `description` names the calling context (e.g. "for parametrize") and
    /// `origin` optionally identifies where the value came from (e.g. a test
    /// node id). Matching is exact and case-sensitive. On failure the
    /// returned [`ScopeError::UnexpectedScope`] carries a message ready to be
    /// shown to the user:
    ///
    /// `for parametrize from some::id got an unexpected scope value 'foo'`
    pub fn from_label(label: &str, description: &str, origin: Option<&str>) -> Result<Scope> {
        if let Some(scope) = Scope::ALL.into_iter().find(|s| s.label() == label) {
            tracing::debug!(label, description, "resolved scope");
            return Ok(scope);
        }

        let from = match origin {
            Some(origin) if !origin.is_empty() => format!("from {origin} "),
            _ => String::new(),
        };
        Err(ScopeError::UnexpectedScope {
            label: label.to_string(),
            message: format!("{description} {from}got an unexpected scope value '{label}'"),
        })
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Scope::from_label(s, "while parsing", None)
    }
}
