//! Tourist accounts: signing up and the profile page.

pub mod profile;
pub mod signup;

use crate::error::form::FormError;

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }

    Ok(value.to_string())
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required(value, "Email")?;
    if !value.contains('@') {
        return Err(FormError::InvalidField {
            field: "Email",
            expected: "a valid email address",
        });
    }

    Ok(value)
}

/// Birthdays are exchanged as `YYYY-MM-DD` strings
fn birth_day(value: &str) -> Result<String, FormError> {
    let value = required(value, "Birthday")?;
    chrono::NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        FormError::InvalidField {
            field: "Birthday",
            expected: "a date in YYYY-MM-DD format",
        }
    })?;

    Ok(value)
}
