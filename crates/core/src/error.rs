// crates/core/src/error.rs
use thiserror::Error;

/// Errors that can occur when normalizing a raw backend payload.
///
/// Normalization is the only fallible seam in this crate: everything
/// downstream of it is total. Individually malformed records are skipped
/// with a warning rather than surfaced here; these variants cover documents
/// whose top-level shape is unusable.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("payload root is not a JSON object")]
    NotAnObject,

    #[error("payload has neither a `speeches` nor an `evaluations` list")]
    MissingSessionLists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(NormalizeError::NotAnObject.to_string().contains("JSON object"));
        assert!(NormalizeError::MissingSessionLists
            .to_string()
            .contains("speeches"));
    }
}
