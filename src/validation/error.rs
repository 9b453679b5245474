use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    Mismatch,
}

/// A single rejected form field.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {}", describe(.kind))]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

fn describe(kind: &FieldErrorKind) -> String {
    match kind {
        FieldErrorKind::Required => "is required".to_string(),
        FieldErrorKind::InvalidEmail => "is not a valid email address".to_string(),
        FieldErrorKind::TooShort { min } => format!("must be at least {min} characters"),
        FieldErrorKind::Mismatch => "does not match the password".to_string(),
    }
}
