// src/domain/contact.rs

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_SUBJECT: &str = "New message from portfolio";
pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // local@domain.tld, no whitespace, at least one dot after the @
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Raw contact form input, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ContactForm {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown keys are ignored.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = ContactForm::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "name" => form.name = value.into_owned(),
                "email" => form.email = value.into_owned(),
                "subject" => form.subject = value.into_owned(),
                "message" => form.message = value.into_owned(),
                _ => {}
            }
        }
        form
    }

    /// Check every field and report all failures in form order.
    pub fn validate(&self) -> Result<ValidContact, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Please enter your name."));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Please enter your email address."));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new(
                "email",
                "Please enter a valid email address.",
            ));
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::new("message", "Please enter a message."));
        } else if message.chars().count() > MAX_MESSAGE_CHARS {
            errors.push(FieldError::new(
                "message",
                format!("Messages are limited to {MAX_MESSAGE_CHARS} characters."),
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let subject = match self.subject.trim() {
            "" => DEFAULT_SUBJECT.to_string(),
            s => s.to_string(),
        };

        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            subject,
            message: message.to_string(),
        })
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
