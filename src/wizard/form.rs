use std::fmt;

use chrono::NaiveDate;

use crate::{
    error::wizard::WizardError,
    model::{
        destination::DestinationSummary,
        guide::TourGuideDto,
        trip::{PaymentStatus, TripRequestDto, TripStatus},
    },
};

/// Free-form inputs of the information step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Contact,
    Country,
    PassportNumber,
    Address,
    NumAdults,
    NumChildren,
    StartDate,
    NumDays,
    TripPayment,
}

impl FormField {
    /// Every field that must be filled before choosing a guide, in display order
    pub const REQUIRED: [FormField; 10] = [
        Self::Email,
        Self::Contact,
        Self::Country,
        Self::PassportNumber,
        Self::Address,
        Self::NumAdults,
        Self::NumChildren,
        Self::StartDate,
        Self::NumDays,
        Self::TripPayment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Contact => "Contact number",
            Self::Country => "Country",
            Self::PassportNumber => "Passport number",
            Self::Address => "Address",
            Self::NumAdults => "Number of adults",
            Self::NumChildren => "Number of children",
            Self::StartDate => "Start date",
            Self::NumDays => "Number of days",
            Self::TripPayment => "Trip budget",
        }
    }

    /// HTML input type used to render the field
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Contact => "tel",
            Self::NumAdults | Self::NumChildren | Self::NumDays | Self::TripPayment => "number",
            Self::StartDate => "date",
            Self::Country | Self::PassportNumber | Self::Address => "text",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the tourist has entered so far
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripFormData {
    pub destinations: Vec<DestinationSummary>,
    pub email: String,
    pub contact: String,
    pub country: String,
    pub passport_number: String,
    pub address: String,
    pub num_adults: String,
    pub num_children: String,
    pub start_date: String,
    pub num_days: String,
    pub trip_payment: String,
    pub selected_guide: Option<TourGuideDto>,
}

/// Parsed values of the information step
#[derive(Clone, Debug, PartialEq)]
pub struct TripDetails {
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub start_date: NaiveDate,
    pub number_of_days: u32,
    pub trip_payment: f64,
}

impl TripFormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Contact => &self.contact,
            FormField::Country => &self.country,
            FormField::PassportNumber => &self.passport_number,
            FormField::Address => &self.address,
            FormField::NumAdults => &self.num_adults,
            FormField::NumChildren => &self.num_children,
            FormField::StartDate => &self.start_date,
            FormField::NumDays => &self.num_days,
            FormField::TripPayment => &self.trip_payment,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Email => &mut self.email,
            FormField::Contact => &mut self.contact,
            FormField::Country => &mut self.country,
            FormField::PassportNumber => &mut self.passport_number,
            FormField::Address => &mut self.address,
            FormField::NumAdults => &mut self.num_adults,
            FormField::NumChildren => &mut self.num_children,
            FormField::StartDate => &mut self.start_date,
            FormField::NumDays => &mut self.num_days,
            FormField::TripPayment => &mut self.trip_payment,
        };

        *slot = value.into();
    }

    /// Check the information step.
    ///
    /// Blank fields are reported before malformed ones so the tourist first sees the
    /// generic "fill in all fields" message.
    pub fn validate_details(&self) -> Result<TripDetails, WizardError> {
        if let Some(field) = FormField::REQUIRED
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            return Err(WizardError::MissingField(field));
        }

        Ok(TripDetails {
            number_of_adults: self.parse_count(FormField::NumAdults)?,
            number_of_children: self.parse_count(FormField::NumChildren)?,
            start_date: NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").map_err(
                |_| WizardError::InvalidField {
                    field: FormField::StartDate,
                    expected: "a date in YYYY-MM-DD format",
                },
            )?,
            number_of_days: self.parse_count(FormField::NumDays)?,
            trip_payment: self
                .trip_payment
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|payment| payment.is_finite() && *payment >= 0.0)
                .ok_or(WizardError::InvalidField {
                    field: FormField::TripPayment,
                    expected: "a non-negative amount",
                })?,
        })
    }

    fn parse_count(&self, field: FormField) -> Result<u32, WizardError> {
        self.field(field)
            .trim()
            .parse::<u32>()
            .map_err(|_| WizardError::InvalidField {
                field,
                expected: "a whole number",
            })
    }

    /// Build the trip request submitted at confirmation
    pub fn build_request(&self, tourist_id: i64) -> Result<TripRequestDto, WizardError> {
        if self.destinations.is_empty() {
            return Err(WizardError::EmptySelection);
        }

        let guide = self
            .selected_guide
            .as_ref()
            .ok_or(WizardError::NoGuideSelected)?;
        let details = self.validate_details()?;

        Ok(TripRequestDto {
            tourist_id,
            tourist_passport_number: self.passport_number.trim().to_string(),
            tourist_country: self.country.trim().to_string(),
            tour_guide_id: guide.id,
            destinations: self
                .destinations
                .iter()
                .map(|destination| destination.name.clone())
                .collect(),
            number_of_adults: details.number_of_adults,
            number_of_children: details.number_of_children,
            start_date: details.start_date,
            number_of_days: details.number_of_days,
            trip_status: TripStatus::Pending,
            trip_payment: details.trip_payment,
            payment_status: PaymentStatus::Pending,
        })
    }
}
