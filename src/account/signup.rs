use dioxus_logger::tracing;

use super::{birth_day, email, required};
use crate::{
    error::{api::ApiError, form::FormError},
    model::{
        notice::{IntoNotice, Notice},
        tourist::{TouristRegistrationDto, DEFAULT_PROFILE_PICTURE},
        user::Role,
    },
};

/// Inputs of the sign up form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    PassportNumber,
    Country,
    Address,
    BirthDay,
}

impl SignupField {
    /// Every input in display order
    pub const ALL: [SignupField; 8] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::PassportNumber,
        Self::Country,
        Self::Address,
        Self::BirthDay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::PassportNumber => "Passport Number",
            Self::Country => "Country",
            Self::Address => "Address",
            Self::BirthDay => "Birthday",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
            Self::BirthDay => "date",
            _ => "text",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub passport_number: String,
    pub country: String,
    pub address: String,
    pub birth_day: String,
}

impl SignupForm {
    pub fn field(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::PassportNumber => &self.passport_number,
            SignupField::Country => &self.country,
            SignupField::Address => &self.address,
            SignupField::BirthDay => &self.birth_day,
        }
    }

    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        let slot = match field {
            SignupField::Name => &mut self.name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::PassportNumber => &mut self.passport_number,
            SignupField::Country => &mut self.country,
            SignupField::Address => &mut self.address,
            SignupField::BirthDay => &mut self.birth_day,
        };

        *slot = value.into();
    }

    /// Check the form, a password mismatch is reported before anything else
    pub fn validate(&self) -> Result<TouristRegistrationDto, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(TouristRegistrationDto {
            name: required(&self.name, "Name")?,
            email: email(&self.email)?,
            password: required(&self.password, "Password")?,
            role: Role::Tourist.to_string(),
            passport_number: required(&self.passport_number, "Passport number")?,
            country: required(&self.country, "Country")?,
            address: required(&self.address, "Address")?,
            birth_day: birth_day(&self.birth_day)?,
            profile_picture: DEFAULT_PROFILE_PICTURE.to_string(),
        })
    }
}

/// State of the sign up page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signup {
    pub form: SignupForm,
    submitting: bool,
}

impl Signup {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_submit(&mut self) -> Result<TouristRegistrationDto, FormError> {
        if self.submitting {
            return Err(FormError::SaveInFlight);
        }

        let registration = self.form.validate()?;
        self.submitting = true;

        Ok(registration)
    }

    /// Record the API's answer, `true` when the tourist can go on to sign in
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> (bool, Notice) {
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(email = %self.form.email.trim(), "Registered tourist account");

                self.form = SignupForm::default();
                (true, Notice::success("Sign Up successful! Please log in."))
            }
            Err(e) => (false, e.into_notice()),
        }
    }
}
