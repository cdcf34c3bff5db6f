//! Contact form validation
//!
//! Pure mapping from form data to field errors. Only first name, email,
//! and message can block submission; the remaining fields are optional
//! and never produce errors.

use folio_email::{ContactFormData, EMAIL_REGEX};
use serde::{Deserialize, Serialize};

/// Minimum trimmed message length accepted
pub const MIN_MESSAGE_LEN: usize = 10;

/// Form fields addressable by edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    QueryType,
    Message,
}

/// Per-field error messages for the three required fields
///
/// `None` means the field is valid; an all-`None` value means the form is
/// submittable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormErrors {
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Clear the error for one field, leaving the others untouched
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::FirstName => self.first_name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
            // Optional fields never carry errors
            Field::LastName | Field::Phone | Field::Company | Field::QueryType => {}
        }
    }
}

/// Validate the form, returning an error mapping
///
/// Pure and deterministic: identical input yields identical output.
pub fn validate(form: &ContactFormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.first_name.trim().is_empty() {
        errors.first_name = Some("First name is required".to_string());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !EMAIL_REGEX.is_match(email) {
        errors.email = Some("Please enter a valid email address".to_string());
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Message is required".to_string());
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters long".to_string());
    }

    errors
}
