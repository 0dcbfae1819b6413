// src/error.rs
//
// Failure taxonomy for the directory app. Everything degrades to an
// inline message at the frontend; nothing here is retried automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A dataset source could not be fetched, read or parsed.
    #[error("unable to load {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    /// The pipeline was invoked in a state it cannot serve
    /// (e.g. results requested before every facet is bound).
    #[error("filter error: {0}")]
    Filter(String),
}

impl Error {
    pub fn load(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::Load { source_name: source_name.into(), reason: reason.to_string() }
    }
}
