//! Validation Utilities
//!
//! Field-level format rules shared by Business and Product records.
//! Validation always runs on a fully merged record, so an update that
//! produces an invalid combination is rejected as a whole.

use validator::ValidateEmail;

/// First failing field and reason for a rejected record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Check an EIN against the `DD-DDDDDDD` format (two digits, hyphen,
/// seven digits). Any deviation is rejected.
pub fn validate_ein(ein: &str) -> Result<(), ValidationError> {
    if ein.is_empty() {
        return Err(ValidationError::MissingField { field: "ein" });
    }

    let bytes = ein.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2] == b'-'
        && bytes[3..].iter().all(u8::is_ascii_digit);

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "ein",
            reason: "expected format DD-DDDDDDD",
        })
    }
}

/// Check that a name is present and non-empty.
pub fn validate_name(name: &str, field: &'static str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(())
    }
}

/// Check email syntax (local-part `@` domain).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingField { field: "email" });
    }

    // validator accepts dotless domains like `user@localhost`; this API
    // requires at least one dot in the domain part.
    let domain_has_dot = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);

    if email.validate_email() && domain_has_dot {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "not a valid email address",
        })
    }
}
