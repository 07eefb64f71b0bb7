use chrono::NaiveDate;
use dioxus_logger::tracing;

use super::{birth_day, email, required};
use crate::{
    api::{ApiClient, HttpTransport},
    error::{api::ApiError, form::FormError},
    model::{
        notice::{IntoNotice, Notice},
        tourist::{TouristProfileDto, TouristProfileUpdateDto},
        trip::TripDto,
    },
};

/// Editable copy of the profile fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub passport_number: String,
    pub country: String,
    pub address: String,
    pub birth_day: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &TouristProfileDto) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            passport_number: profile.tourist.passport_number.clone(),
            country: profile.tourist.country.clone(),
            address: profile.tourist.address.clone(),
            birth_day: profile.tourist.birth_day.clone(),
        }
    }

    pub fn validate(&self) -> Result<TouristProfileUpdateDto, FormError> {
        Ok(TouristProfileUpdateDto {
            name: required(&self.name, "Name")?,
            email: email(&self.email)?,
            passport_number: required(&self.passport_number, "Passport number")?,
            country: required(&self.country, "Country")?,
            address: required(&self.address, "Address")?,
            birth_day: birth_day(&self.birth_day)?,
        })
    }
}

/// Outcome of loading the profile and the finished trips together
pub type AccountLoad = (
    Result<TouristProfileDto, ApiError>,
    Result<Vec<TripDto>, ApiError>,
);

/// State of the tourist account page
#[derive(Clone, Debug, PartialEq)]
pub struct TouristAccount {
    pub profile: Option<TouristProfileDto>,
    pub completed_trips: Vec<TripDto>,
    pub loading: bool,
    /// Present while the profile is being edited
    pub editing: Option<ProfileForm>,
    saving: bool,
}

impl Default for TouristAccount {
    fn default() -> Self {
        Self {
            profile: None,
            completed_trips: Vec::new(),
            loading: true,
            editing: None,
            saving: false,
        }
    }
}

impl TouristAccount {
    pub async fn fetch<T: HttpTransport>(api: &ApiClient<T>, tourist_id: i64) -> AccountLoad {
        futures::join!(
            api.get_tourist_profile(tourist_id),
            api.tourist_completed_trips(tourist_id),
        )
    }

    pub fn apply(&mut self, (profile, trips): AccountLoad) -> Vec<Notice> {
        let mut notices = Vec::new();

        match profile {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => notices.push(e.into_notice()),
        }
        match trips {
            Ok(trips) => self.completed_trips = trips,
            Err(e) => notices.push(e.into_notice()),
        }
        self.loading = false;

        notices
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Age in whole years on `today`, `None` without a readable birthday
    pub fn age(&self, today: NaiveDate) -> Option<u32> {
        let profile = self.profile.as_ref()?;
        let born = NaiveDate::parse_from_str(profile.tourist.birth_day.trim(), "%Y-%m-%d").ok()?;

        today.years_since(born).or_else(|| {
            tracing::debug!(birth_day = %born, "Birthday lies in the future");
            None
        })
    }

    pub fn begin_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.editing = Some(ProfileForm::from_profile(profile));
        }
    }

    pub fn cancel_edit(&mut self) {
        if !self.saving {
            self.editing = None;
        }
    }

    /// Validate the edited profile and mark the save as in flight, `Ok(None)` when not editing
    pub fn begin_save(&mut self) -> Result<Option<TouristProfileUpdateDto>, FormError> {
        let Some(form) = &self.editing else {
            return Ok(None);
        };
        if self.saving {
            return Err(FormError::SaveInFlight);
        }

        let update = form.validate()?;
        self.saving = true;

        Ok(Some(update))
    }

    /// Record the API's answer, a stored update replaces the shown profile
    pub fn finish_save(
        &mut self,
        update: TouristProfileUpdateDto,
        result: Result<(), ApiError>,
    ) -> Notice {
        self.saving = false;

        match result {
            Ok(()) => {
                if let Some(profile) = &mut self.profile {
                    profile.name = update.name;
                    profile.email = update.email;
                    profile.tourist.passport_number = update.passport_number;
                    profile.tourist.country = update.country;
                    profile.tourist.address = update.address;
                    profile.tourist.birth_day = update.birth_day;
                }
                self.editing = None;

                Notice::success("Profile updated successfully!")
            }
            Err(e) => {
                tracing::warn!("Failed to update tourist profile: {}", e);

                match e {
                    ApiError::Status { .. } => {
                        Notice::error("Failed to update profile. Please try again.")
                    }
                    other => other.into_notice(),
                }
            }
        }
    }
}
