//! Error types for credential validation.
//!
//! Reading credentials never fails. These errors only come out of the opt-in
//! [`Credentials::validate`](crate::credentials::Credentials::validate) check a
//! networking consumer may run before it tries to join a network.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for credential operations.
pub type Result<T> = core::result::Result<T, SecretsError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Credential error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum CredentialErrorKind {
    EmptyIdentifier,
    IdentifierTooLong,
    SecretTooShort,
    SecretTooLong,
    SecretNotPrintable,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// Credential holder error types.
#[derive(Debug)]
pub enum SecretsError {
    /// The credential pair cannot be used to join a network
    Credential(CredentialError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Credential error with optional backtrace
#[derive(Debug)]
pub struct CredentialError {
    kind: CredentialErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl CredentialError {
    pub(crate) fn new(kind: CredentialErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the network identifier is empty
    pub fn is_empty_identifier(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::EmptyIdentifier)
    }

    /// Check if the network identifier exceeds 32 bytes
    pub fn is_identifier_too_long(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::IdentifierTooLong)
    }

    /// Check if the passphrase is shorter than 8 characters
    pub fn is_secret_too_short(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::SecretTooShort)
    }

    /// Check if the passphrase is longer than 63 characters (and not a raw PSK)
    pub fn is_secret_too_long(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::SecretTooLong)
    }

    /// Check if the passphrase holds non-printable or non-ASCII characters
    pub fn is_secret_not_printable(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::SecretNotPrintable)
    }

    /// Backtrace captured when the error was created
    #[cfg(feature = "std")]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CredentialError {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "CredentialError({})", self.kind);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SecretsError {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            SecretsError::Credential(e) => defmt::write!(f, "Credential error: {}", e),
        }
    }
}

// =============================================================================
// Convenience Constructors for SecretsError
// =============================================================================

impl SecretsError {
    pub(crate) fn empty_identifier() -> Self {
        Self::Credential(CredentialError::new(CredentialErrorKind::EmptyIdentifier))
    }

    pub(crate) fn identifier_too_long() -> Self {
        Self::Credential(CredentialError::new(CredentialErrorKind::IdentifierTooLong))
    }

    pub(crate) fn secret_too_short() -> Self {
        Self::Credential(CredentialError::new(CredentialErrorKind::SecretTooShort))
    }

    pub(crate) fn secret_too_long() -> Self {
        Self::Credential(CredentialError::new(CredentialErrorKind::SecretTooLong))
    }

    pub(crate) fn secret_not_printable() -> Self {
        Self::Credential(CredentialError::new(CredentialErrorKind::SecretNotPrintable))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            CredentialErrorKind::EmptyIdentifier => "network identifier is empty",
            CredentialErrorKind::IdentifierTooLong => "network identifier exceeds 32 bytes",
            CredentialErrorKind::SecretTooShort => "passphrase is shorter than 8 characters",
            CredentialErrorKind::SecretTooLong => "passphrase is longer than 63 characters",
            CredentialErrorKind::SecretNotPrintable => {
                "passphrase contains non-printable or non-ASCII characters"
            }
        };
        f.write_str(msg)
    }
}

impl fmt::Display for SecretsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretsError::Credential(e) => write!(f, "Credential error: {e}"),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for CredentialError {}

#[cfg(feature = "std")]
impl std::error::Error for SecretsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SecretsError::Credential(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_match_kind() {
        let SecretsError::Credential(e) = SecretsError::secret_too_short();
        assert!(e.is_secret_too_short());
        assert!(!e.is_secret_too_long());
        assert!(!e.is_empty_identifier());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SecretsError::empty_identifier().to_string(),
            "Credential error: network identifier is empty"
        );
        assert_eq!(
            SecretsError::identifier_too_long().to_string(),
            "Credential error: network identifier exceeds 32 bytes"
        );
        assert_eq!(
            SecretsError::secret_not_printable().to_string(),
            "Credential error: passphrase contains non-printable or non-ASCII characters"
        );
    }
}
