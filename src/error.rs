use std::path::PathBuf;

use crate::scope::Scope;

#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// A scope label supplied by the user did not name any scope.
    ///
    /// The message is meant to be shown to the user as-is.
    #[error("{message}")]
    UnexpectedScope { label: String, message: String },

    /// `next_narrower` was called on the narrowest scope.
    #[error("no scope narrower than {scope:?}")]
    NoNarrowerScope { scope: Scope },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScopeError {
    /// True when the error was caused by invalid external input rather
    /// than by a caller bug.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScopeError::UnexpectedScope { .. } | ScopeError::ConfigParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
