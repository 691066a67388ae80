//! Form validation predicates.
//!
//! Pure functions: no normalization, no side effects. The same email shape
//! rule (`local@domain.tld`, no whitespace, no extra `@`) applies to both
//! forms.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::forms::{ContactFormData, NewsletterForm};

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
}

/// Check the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// A form that can be checked before a simulated submit.
pub trait Validate {
    /// First failing constraint, if any.
    fn check(&self) -> Result<(), ValidationError>;

    /// `true` iff [`check`](Validate::check) passes.
    fn validate(&self) -> bool {
        self.check().is_ok()
    }
}

impl Validate for ContactFormData {
    fn check(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }
}

impl Validate for NewsletterForm {
    fn check(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}
