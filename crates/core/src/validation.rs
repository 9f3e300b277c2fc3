//! Waitlist submission checks.

use thiserror::Error;

use crate::api::WaitlistRequest;
use crate::model::WaitlistEntry;

/// Why a waitlist submission was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WaitlistError {
    /// Email missing or without `@`.
    #[error("email is missing or has no '@'")]
    InvalidCredentials,
    /// Name or company missing.
    #[error("name and company are required")]
    IncompleteProfile,
}

impl WaitlistError {
    /// Wire code returned to the client.
    pub fn code(&self) -> &'static str {
        match self {
            WaitlistError::InvalidCredentials => "INVALID_CREDENTIALS",
            WaitlistError::IncompleteProfile => "INCOMPLETE_PROFILE",
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Checks a submission. The email is checked before name and company.
///
/// Values are not trimmed: whitespace counts as content.
pub fn validate_waitlist(req: &WaitlistRequest) -> Result<(), WaitlistError> {
    match present(&req.email) {
        Some(email) if email.contains('@') => {}
        _ => return Err(WaitlistError::InvalidCredentials),
    }
    if present(&req.name).is_none() || present(&req.company).is_none() {
        return Err(WaitlistError::IncompleteProfile);
    }
    Ok(())
}

/// Validates `req` and stamps it with `timestamp`.
pub fn into_entry(req: WaitlistRequest, timestamp: String) -> Result<WaitlistEntry, WaitlistError> {
    validate_waitlist(&req)?;
    Ok(WaitlistEntry {
        timestamp,
        name: req.name.unwrap_or_default(),
        company: req.company.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
    })
}
