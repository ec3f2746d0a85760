//! Operational error reporting with `anyhow`.
//!
//! Storage writes are infallible from the registry's point of view, so store
//! implementations hand their failures to [`ErrorReporter`] instead of
//! propagating them. The command-line front end uses it to render errors.

use {anyhow::Error, tracing::warn};

/// Centralized reporting for failures that are logged rather than returned.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports a recoverable failure, such as a store write that did not reach disk.
    pub fn warn(error: &Error, context: &str) {
        warn!(context = context, error = %error, "Recoverable settings failure");
    }

    /// Renders the full context chain of an error on one line.
    pub fn to_user_message(error: &Error) -> String {
        format!("{error:#}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind::NotFound};

    use anyhow::{Context, anyhow};

    use crate::error::operational::ErrorReporter;

    #[test]
    fn test_user_message_includes_context_chain() {
        let result: Result<(), Error> = Err(Error::new(NotFound, "missing"));
        let error = result.context("Failed to open store").unwrap_err();

        assert_eq!(error.to_string(), "Failed to open store");
        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Failed to open store: missing"
        );
    }

    #[test]
    fn test_user_message_without_context() {
        let error = anyhow!("Unknown setting: fontSize");
        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Unknown setting: fontSize"
        );
    }
}
