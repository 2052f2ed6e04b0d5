use super::Scope;
use crate::error::{Result, ScopeError};

/// Scopes which can contain many tests (all except Function), broadest first.
pub const HIGH_SCOPES: [Scope; 4] = [Scope::Session, Scope::Package, Scope::Module, Scope::Class];

impl Scope {
    /// Position in the broad-to-narrow ordering. Session = 0.
    pub fn ordinal(self) -> usize {
        match self {
            Scope::Session => 0,
            Scope::Package => 1,
            Scope::Module => 2,
            Scope::Class => 3,
            Scope::Function => 4,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Scope> {
        Scope::ALL.get(ordinal).copied()
    }

    /// The scope one step narrower than this one.
    ///
    /// Function is the bottom scope; asking for its successor is a caller
    /// bug and yields [`ScopeError::NoNarrowerScope`].
    pub fn next_narrower(self) -> Result<Scope> {
        Scope::from_ordinal(self.ordinal() + 1)
            .ok_or(ScopeError::NoNarrowerScope { scope: self })
    }

    pub fn is_high(self) -> bool {
        self != Scope::Function
    }

    pub fn is_broader_than(self, other: Scope) -> bool {
        self.ordinal() < other.ordinal()
    }
}
