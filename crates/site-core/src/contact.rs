//! Contact form state.
//!
//! The form only collects values: submitting hands back a snapshot and clears
//! every field. There is no validation, storage or network step.

use serde::Serialize;

use crate::error::Error;
use crate::result::{Result, ResultExt};

/// Confirmation shown to the visitor after submitting.
pub const SUBMITTED_MESSAGE: &str = "Message sent! We will contact you soon.";

/// Editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Mobile,
    City,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Mobile,
        Self::City,
        Self::Message,
    ];

    /// Form control name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::City => "city",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Mobile => "Mobile",
            Self::City => "City",
            Self::Message => "How can we help?",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Jane Doe",
            Self::Email => "you@example.com",
            Self::Mobile => "+91",
            Self::City => "Mumbai",
            Self::Message => "Tell us about your requirements",
        }
    }

    /// HTML input type; the message field renders as a textarea.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Mobile => "tel",
            Self::Name | Self::City | Self::Message => "text",
        }
    }
}

/// Values captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    pub message: String,
}

impl Submission {
    /// JSON object keyed by field name, as logged on submit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::JsonEncodeFailed`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::json_encode_failed(e.to_string()))
    }
}

/// Live form: current values plus the focused field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: Submission,
    focused: Option<ContactField>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.values.name,
            ContactField::Email => &self.values.email,
            ContactField::Mobile => &self.values.mobile,
            ContactField::City => &self.values.city,
            ContactField::Message => &self.values.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.values.name,
            ContactField::Email => &mut self.values.email,
            ContactField::Mobile => &mut self.values.mobile,
            ContactField::City => &mut self.values.city,
            ContactField::Message => &mut self.values.message,
        };
        *slot = value.into();
    }

    #[must_use]
    pub const fn focused(&self) -> Option<ContactField> {
        self.focused
    }

    #[must_use]
    pub fn is_focused(&self, field: ContactField) -> bool {
        self.focused == Some(field)
    }

    pub const fn focus(&mut self, field: ContactField) {
        self.focused = Some(field);
    }

    /// Clear focus, but only if `field` still holds it.
    pub fn blur(&mut self, field: ContactField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Take the current values and reset the form.
    pub fn submit(&mut self) -> Submission {
        let submission = std::mem::take(&mut self.values);
        self.focused = None;
        let payload = submission
            .to_json()
            .or_logged("submission payload", String::new());
        tracing::info!(%payload, "contact form submitted");
        submission
    }
}
