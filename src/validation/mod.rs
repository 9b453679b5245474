//! Sign-in and sign-up form validation.
//!
//! Every field is checked and every failure is reported, so a form can
//! mark all of its bad inputs at once. A valid form turns into the payload
//! the API expects.

mod error;

pub use error::{Field, FieldError, FieldErrorKind};

use crate::model::{LoginCredentials, RegisterData};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const MIN_PASSWORD_LEN: usize = 6;

pub type FormValidation<T> = Validation<T, NonEmptyVec<FieldError>>;

type Check = Validation<(), NonEmptyVec<FieldError>>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn validate_login(form: &LoginForm) -> FormValidation<LoginCredentials> {
    let checks = vec![check_email(&form.email), check_password(&form.password)];

    Validation::all_vec(checks).map(|_| LoginCredentials {
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

pub fn validate_register(form: &RegisterForm) -> FormValidation<RegisterData> {
    let checks = vec![
        check_required(Field::FirstName, &form.first_name),
        check_required(Field::LastName, &form.last_name),
        check_email(&form.email),
        check_password(&form.password),
        check_confirmation(&form.password, &form.confirm_password),
    ];

    Validation::all_vec(checks).map(|_| RegisterData {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

/// `local@domain.tld` with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // at least one dot with text on both sides, anywhere in the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn fail(field: Field, kind: FieldErrorKind) -> Check {
    Validation::fail(FieldError { field, kind })
}

fn check_required(field: Field, value: &str) -> Check {
    if value.trim().is_empty() {
        fail(field, FieldErrorKind::Required)
    } else {
        Validation::success(())
    }
}

fn check_email(email: &str) -> Check {
    if email.is_empty() {
        fail(Field::Email, FieldErrorKind::Required)
    } else if !is_valid_email(email) {
        fail(Field::Email, FieldErrorKind::InvalidEmail)
    } else {
        Validation::success(())
    }
}

fn check_password(password: &str) -> Check {
    if password.is_empty() {
        fail(Field::Password, FieldErrorKind::Required)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        fail(
            Field::Password,
            FieldErrorKind::TooShort {
                min: MIN_PASSWORD_LEN,
            },
        )
    } else {
        Validation::success(())
    }
}

fn check_confirmation(password: &str, confirmation: &str) -> Check {
    if confirmation.is_empty() {
        fail(Field::ConfirmPassword, FieldErrorKind::Required)
    } else if confirmation != password {
        fail(Field::ConfirmPassword, FieldErrorKind::Mismatch)
    } else {
        Validation::success(())
    }
}
