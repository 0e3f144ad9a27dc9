//! Error handling for the CellVis-RS view layer
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate.

use thiserror::Error;

/// Main error type for CellVis-RS operations
#[derive(Error, Debug)]
pub enum CellVisError {
    /// Errors returned by the injected fetch capability
    #[error("Fetch error for '{resource}': {message}")]
    Fetch { resource: String, message: String },

    /// A status delta that cannot be committed as a whole
    #[error("Invalid status update: {0}")]
    InvalidUpdate(String),

    /// The requested item cannot be plotted (surfaced to the user as a notice)
    #[error("Not plottable: {0}")]
    NotPlottable(String),

    /// One or more child views failed during a container fan-out
    #[error("{failed} of {total} child views failed; first: {first}")]
    ChildFailures {
        failed: usize,
        total: usize,
        #[source]
        first: Box<CellVisError>,
    },

    /// Errors related to configuration loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors (cell-list export)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CellVisError>,
    },
}

impl CellVisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CellVisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a fetch error for a named resource
    pub fn fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        CellVisError::Fetch {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for CellVis-RS operations
pub type Result<T> = std::result::Result<T, CellVisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CellVisError::InvalidUpdate("selected_cells is empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid status update: selected_cells is empty"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = CellVisError::fetch("cell_meta", "connection reset");
        let with_ctx = err.with_context("fetching metadata for cell 'c1'");
        assert!(with_ctx
            .to_string()
            .contains("fetching metadata for cell 'c1'"));
    }

    #[test]
    fn test_fetch_error() {
        let err = CellVisError::fetch("cell_meta", "connection reset");
        assert!(err.to_string().contains("cell_meta"));
        assert!(err.to_string().contains("connection reset"));
    }
}
