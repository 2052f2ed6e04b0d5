//! Ordered fixture scopes (session, package, module, class, function) with
//! strict conversion from user-supplied labels.

pub mod cli;
pub mod config;
pub mod error;
pub mod scope;

pub use error::{Result, ScopeError};
pub use scope::{Scope, HIGH_SCOPES};
