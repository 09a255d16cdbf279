//! Form Errors
//!
//! `Display` output is the text shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Required names missing; nothing was sent
    #[error("Please provide student's first and last name.")]
    MissingName,
    /// Endpoint answered with a non-success status
    #[error("Submission failed: {0}")]
    Server(String),
    /// Network, serialization or response parse failure
    #[error("Submission failed: {0}")]
    Transport(String),
    #[error("Could not read photo: {0}")]
    PhotoRead(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FormError::MissingName.to_string(), "Please provide student's first and last name.");
        assert_eq!(FormError::Server("Duplicate application".into()).to_string(), "Submission failed: Duplicate application");
        assert_eq!(FormError::Transport("Failed to fetch".into()).to_string(), "Submission failed: Failed to fetch");
    }
}
