//! Create and edit forms of the admin listings.
//!
//! An [`Editor`] holds one form at a time, either for a new entity or for an existing
//! one. Saving follows the same two phases as the trip wizard: [`Editor::begin_save`]
//! validates and returns the payload, the caller sends it, and [`Editor::finish_save`]
//! records the outcome.

use dioxus_logger::tracing;

use crate::{
    error::{api::ApiError, form::FormError},
    model::{
        destination::{DestinationDto, DestinationPayload},
        guide::{TourGuideDto, TourGuideProfileDto, TourGuideRegistrationDto},
        notice::{IntoNotice, Notice},
    },
};

pub const DESTINATION_TYPES: [&str; 4] = ["Historical", "Beach", "Attraction", "Cultural"];
pub const PROVINCES: [&str; 5] = ["Central", "Eastern", "Southern", "Western", "Northern"];
pub const DISTRICTS: [&str; 4] = ["Galle", "Matale", "Ampara", "Nuwara Eliya"];
pub const CLIMATES: [&str; 3] = ["Dry", "Wet", "Intermediate"];
pub const ACTIVITIES: [&str; 10] = [
    "Hiking",
    "Surfing",
    "Photography",
    "Relaxing",
    "Cycling",
    "Diving",
    "Safari",
    "Yoga & Meditation",
    "Adventure",
    "Cultural",
];

/// What a save will do remotely
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    New,
    /// Update of the entity with this remote id
    Existing(i64),
}

/// A form that creates or edits one kind of entity
pub trait EntityForm: Clone + Default + PartialEq {
    type Entity;
    type Payload;

    /// Capitalised name used in notices, e.g. "Destination"
    const NOUN: &'static str;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Remote id addressed when updating `entity`
    fn target_id(entity: &Self::Entity) -> i64;

    fn validate(&self, target: EditTarget) -> Result<Self::Payload, FormError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Editor<F> {
    target: Option<EditTarget>,
    form: F,
    saving: bool,
}

impl<F: EntityForm> Editor<F> {
    pub fn open_new(&mut self) {
        self.target = Some(EditTarget::New);
        self.form = F::default();
    }

    pub fn open_edit(&mut self, entity: &F::Entity) {
        self.target = Some(EditTarget::Existing(F::target_id(entity)));
        self.form = F::from_entity(entity);
    }

    /// Close the form, an in-flight save keeps it open
    pub fn close(&mut self) {
        if !self.saving {
            self.target = None;
        }
    }

    pub fn target(&self) -> Option<EditTarget> {
        self.target
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Validate the form and mark the save as in flight.
    ///
    /// # Returns
    /// - `Ok(Some(..))` - The target and payload to send
    /// - `Ok(None)` - No form is open
    /// - `Err(FormError)` - The form is invalid or already being saved
    pub fn begin_save(&mut self) -> Result<Option<(EditTarget, F::Payload)>, FormError> {
        let Some(target) = self.target else {
            return Ok(None);
        };
        if self.saving {
            return Err(FormError::SaveInFlight);
        }

        let payload = self.form.validate(target)?;
        self.saving = true;

        Ok(Some((target, payload)))
    }

    /// Record the API's answer, a successful save closes the form
    pub fn finish_save(&mut self, target: EditTarget, result: Result<(), ApiError>) -> Notice {
        self.saving = false;

        let action = match target {
            EditTarget::New => "added",
            EditTarget::Existing(_) => "updated",
        };

        match result {
            Ok(()) => {
                tracing::info!(entity = F::NOUN, action, "Saved admin form");

                self.target = None;
                Notice::success(format!("{} {} successfully!", F::NOUN, action))
            }
            Err(e) => {
                tracing::warn!(entity = F::NOUN, action, "Failed to save admin form: {}", e);

                match e {
                    ApiError::Status { .. } => Notice::error(format!(
                        "Failed to {} {}.",
                        match target {
                            EditTarget::New => "add",
                            EditTarget::Existing(_) => "update",
                        },
                        F::NOUN.to_lowercase()
                    )),
                    other => other.into_notice(),
                }
            }
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }

    Ok(value.to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationForm {
    pub name: String,
    pub kind: String,
    pub province: String,
    pub district: String,
    pub climate: String,
    pub image: String,
    pub activities: Vec<String>,
    /// One paragraph per line
    pub details: String,
}

impl DestinationForm {
    pub fn toggle_activity(&mut self, activity: &str) {
        if self.activities.iter().any(|a| a == activity) {
            self.activities.retain(|a| a != activity);
        } else {
            self.activities.push(activity.to_string());
        }
    }
}

impl EntityForm for DestinationForm {
    type Entity = DestinationDto;
    type Payload = DestinationPayload;

    const NOUN: &'static str = "Destination";

    fn from_entity(destination: &DestinationDto) -> Self {
        Self {
            name: destination.name.clone(),
            kind: destination.kind.clone(),
            province: destination.province.clone(),
            district: destination.district.clone(),
            climate: destination.climate.clone(),
            image: destination.image.clone(),
            activities: destination.activities.clone(),
            details: destination.details.join("\n"),
        }
    }

    fn target_id(destination: &DestinationDto) -> i64 {
        destination.id
    }

    fn validate(&self, _target: EditTarget) -> Result<DestinationPayload, FormError> {
        Ok(DestinationPayload {
            name: required(&self.name, "Name")?,
            kind: required(&self.kind, "Type")?,
            province: required(&self.province, "Province")?,
            district: required(&self.district, "District")?,
            climate: required(&self.climate, "Climate")?,
            image: required(&self.image, "Image URL")?,
            activities: self.activities.clone(),
            details: self
                .details
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourGuideForm {
    pub name: String,
    pub email: String,
    /// Only used when registering a new guide
    pub password: String,
    pub nic: String,
    pub telephone: String,
    pub address: String,
    pub license_number: String,
    pub review_count: String,
}

/// Registration of a new guide or a profile update of an existing one
#[derive(Clone, Debug, PartialEq)]
pub enum TourGuidePayload {
    Register(TourGuideRegistrationDto),
    Update {
        user_id: i64,
        profile: TourGuideProfileDto,
    },
}

impl EntityForm for TourGuideForm {
    type Entity = TourGuideDto;
    type Payload = TourGuidePayload;

    const NOUN: &'static str = "Tour guide";

    fn from_entity(guide: &TourGuideDto) -> Self {
        Self {
            name: guide.name.clone(),
            email: guide.email.clone().unwrap_or_default(),
            password: String::new(),
            nic: guide.nic.clone(),
            telephone: guide.telephone.clone(),
            address: guide.address.clone(),
            license_number: guide.license_number.clone(),
            review_count: guide.review_count.to_string(),
        }
    }

    /// Guide profiles are addressed by the guide's user account
    fn target_id(guide: &TourGuideDto) -> i64 {
        guide.user_id
    }

    fn validate(&self, target: EditTarget) -> Result<TourGuidePayload, FormError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?;
        if !email.contains('@') {
            return Err(FormError::InvalidField {
                field: "Email",
                expected: "a valid email address",
            });
        }
        let nic = required(&self.nic, "NIC")?;
        let telephone = required(&self.telephone, "Telephone")?;
        let address = required(&self.address, "Address")?;
        let license_number = required(&self.license_number, "License number")?;

        match target {
            EditTarget::New => {
                let password = required(&self.password, "Password")?;
                let review_count = match self.review_count.trim() {
                    "" => 0,
                    count => count.parse().map_err(|_| FormError::InvalidField {
                        field: "Review count",
                        expected: "a whole number",
                    })?,
                };

                Ok(TourGuidePayload::Register(TourGuideRegistrationDto {
                    name,
                    email,
                    password,
                    nic,
                    telephone,
                    address,
                    license_number,
                    review_count,
                }))
            }
            EditTarget::Existing(user_id) => Ok(TourGuidePayload::Update {
                user_id,
                profile: TourGuideProfileDto {
                    name,
                    email,
                    nic,
                    telephone,
                    address,
                    license_number,
                },
            }),
        }
    }
}
