//! The five step trip planning wizard.
//!
//! [`TripWizard`] owns all wizard state. Remote work is split in two phases so the UI
//! never holds its state across an await: a `request_*`/`begin_*` method validates and
//! returns what must be sent, the caller performs the API call, and the matching
//! `apply_*`/`finish_*` method records the outcome. The `async` methods compose both
//! phases for callers that own the wizard outright.

pub mod board;
pub mod form;
pub mod step;

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, HttpTransport},
    directory::GuideDirectory,
    error::{api::ApiError, identity::IdentityError, wizard::WizardError, Error},
    model::{
        destination::DestinationDto,
        guide::TourGuideDto,
        notice::{IntoNotice, Notice},
        trip::{TripDto, TripRequestDto},
    },
    session::Identity,
};

use self::{
    board::{BoardLoad, DestinationBoard},
    form::{FormField, TripFormData},
    step::WizardStep,
};

/// A pending replacement of the tourist's selected destinations
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionChange {
    pub tourist_id: i64,
    pub destination_ids: Vec<i64>,
    selected: Vec<DestinationDto>,
}

/// A pending removal of one destination from the tourist's wishlist
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishlistRemoval {
    pub tourist_id: i64,
    pub destination_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TripWizard {
    identity: Identity,
    step: WizardStep,
    form: TripFormData,
    board: DestinationBoard,
    guides: GuideDirectory,
    notices: Vec<Notice>,
    submitting: bool,
    /// A selection change has been planned and its save has not been applied yet
    saving_selection: bool,
}

impl TripWizard {
    /// Start a new flow with empty defaults for the given user
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            step: WizardStep::default(),
            form: TripFormData::default(),
            board: DestinationBoard::default(),
            guides: GuideDirectory::default(),
            notices: Vec::new(),
            submitting: false,
            saving_selection: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &TripFormData {
        &self.form
    }

    pub fn board(&self) -> &DestinationBoard {
        &self.board
    }

    pub fn guides(&self) -> &GuideDirectory {
        &self.guides
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_saving_selection(&self) -> bool {
        self.saving_selection
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notices produced since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn report<E: IntoNotice>(&mut self, error: E) {
        self.notices.push(error.into_notice());
    }

    fn tourist_id(&mut self) -> Result<i64, IdentityError> {
        match self.identity.user_id() {
            Some(user_id) => Ok(user_id),
            None => {
                self.report(IdentityError::Unauthenticated);

                Err(IdentityError::Unauthenticated)
            }
        }
    }

    /// Report a refused action to the user and hand the error back
    fn reject(&mut self, error: WizardError) -> WizardError {
        self.report(error.clone());

        error
    }

    /* Step 1: destinations */

    /// Mark the board as loading and return the tourist whose data must be fetched
    pub fn begin_load(&mut self) -> Result<i64, IdentityError> {
        let tourist_id = self.tourist_id()?;
        self.board.loading = true;

        Ok(tourist_id)
    }

    pub fn apply_load(&mut self, load: BoardLoad) {
        let notices = self.board.apply(load);
        self.notices.extend(notices);
    }

    /// Plan adding a wishlist destination to the selection.
    ///
    /// Only one selection change may be in flight; it is built from the selection as
    /// last confirmed by the API.
    ///
    /// # Returns
    /// - `Ok(Some(change))` - The change to send to the API
    /// - `Ok(None)` - The destination is already selected, nothing needs sending
    pub fn request_add(&mut self, destination_id: i64) -> Result<Option<SelectionChange>, Error> {
        if self.saving_selection {
            return Err(self.reject(WizardError::SelectionSaveInFlight).into());
        }
        if self.board.is_selected(destination_id) {
            self.notices
                .push(Notice::info("This destination is already selected."));

            return Ok(None);
        }

        let tourist_id = self.tourist_id()?;
        let Some(destination) = self.board.wishlist_entry(destination_id).cloned() else {
            tracing::warn!(destination_id = %destination_id, "Destination is not on the wishlist");

            return Ok(None);
        };

        let mut selected = self.board.selected.clone();
        selected.push(destination);
        self.saving_selection = true;

        Ok(Some(SelectionChange {
            tourist_id,
            destination_ids: selected.iter().map(|d| d.id).collect(),
            selected,
        }))
    }

    /// Plan removing a destination from the selection, `Ok(None)` when it is not selected
    pub fn request_remove_selected(
        &mut self,
        destination_id: i64,
    ) -> Result<Option<SelectionChange>, Error> {
        if self.saving_selection {
            return Err(self.reject(WizardError::SelectionSaveInFlight).into());
        }
        if !self.board.is_selected(destination_id) {
            return Ok(None);
        }

        let tourist_id = self.tourist_id()?;
        let selected: Vec<DestinationDto> = self
            .board
            .selected
            .iter()
            .filter(|d| d.id != destination_id)
            .cloned()
            .collect();
        self.saving_selection = true;

        Ok(Some(SelectionChange {
            tourist_id,
            destination_ids: selected.iter().map(|d| d.id).collect(),
            selected,
        }))
    }

    /// Record the outcome of sending a [`SelectionChange`]
    pub fn apply_selection(
        &mut self,
        change: SelectionChange,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        self.saving_selection = false;

        match result {
            Ok(()) => {
                self.board.selected = change.selected;

                Ok(())
            }
            Err(e) => {
                self.report(e.clone());

                Err(e)
            }
        }
    }

    pub fn request_remove_wishlist(
        &mut self,
        destination_id: i64,
    ) -> Result<Option<WishlistRemoval>, Error> {
        if self.board.wishlist_entry(destination_id).is_none() {
            return Ok(None);
        }

        Ok(Some(WishlistRemoval {
            tourist_id: self.tourist_id()?,
            destination_id,
        }))
    }

    pub fn apply_wishlist_removal(
        &mut self,
        removal: WishlistRemoval,
        result: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.board
                    .wishlist
                    .retain(|d| d.id != removal.destination_id);

                Ok(())
            }
            Err(e) => {
                self.report(e.clone());

                Err(e)
            }
        }
    }

    /* Navigation */

    /// Advance to the next step if the current one is complete.
    ///
    /// On failure the wizard keeps its step and data and a notice explains why.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::SelectDestinations => {
                if self.saving_selection {
                    return Err(self.reject(WizardError::SelectionSaveInFlight));
                }
                if self.board.is_blocked() {
                    return Err(self.reject(WizardError::ActiveTripExists));
                }
                if self.board.selected.is_empty() {
                    return Err(self.reject(WizardError::EmptySelection));
                }

                self.form.destinations = self.board.selection_summary();
            }
            WizardStep::FillInformation => {
                if let Err(e) = self.form.validate_details() {
                    return Err(self.reject(e));
                }
            }
            WizardStep::SelectGuide => (),
            step @ (WizardStep::ConfirmTrip | WizardStep::Success) => {
                return Err(self.reject(WizardError::InvalidTransition {
                    step,
                    action: "continue",
                }));
            }
        }

        let Some(next) = self.step.next() else {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                action: "continue",
            });
        };
        self.step = next;

        Ok(next)
    }

    /// Return to the previous step, keeping everything entered so far
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        match self.step.previous() {
            Some(previous) if !self.submitting => {
                self.step = previous;

                Ok(previous)
            }
            _ => Err(self.reject(WizardError::InvalidTransition {
                step: self.step,
                action: "go back",
            })),
        }
    }

    /* Step 2: information */

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /* Step 3: guide */

    pub fn begin_guides(&mut self) {
        self.guides = GuideDirectory::Loading;
    }

    pub fn apply_guides(
        &mut self,
        result: Result<Vec<TourGuideDto>, ApiError>,
    ) -> Result<(), ApiError> {
        self.guides.apply(&result);

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                self.report(e.clone());

                Err(e)
            }
        }
    }

    /// Pick a guide from the directory, the wizard stays on the current step
    pub fn select_guide(&mut self, guide_id: i64) -> Result<(), WizardError> {
        match self.guides.find(guide_id).cloned() {
            Some(guide) => {
                self.form.selected_guide = Some(guide);

                Ok(())
            }
            None => Err(self.reject(WizardError::UnknownGuide(guide_id))),
        }
    }

    /* Step 4: confirmation */

    /// Build the trip request to submit and mark the submission as in flight.
    ///
    /// # Errors
    /// - A submission is already in flight
    /// - The wizard is not at the confirmation step
    /// - No guide is selected or the form no longer validates
    /// - The user is not signed in
    pub fn begin_submit(&mut self) -> Result<TripRequestDto, Error> {
        if self.submitting {
            return Err(self.reject(WizardError::SubmissionInFlight).into());
        }
        if self.step != WizardStep::ConfirmTrip {
            return Err(self
                .reject(WizardError::InvalidTransition {
                    step: self.step,
                    action: "confirm",
                })
                .into());
        }
        if self.form.selected_guide.is_none() {
            return Err(self.reject(WizardError::NoGuideSelected).into());
        }

        let tourist_id = self.tourist_id()?;
        let request = self
            .form
            .build_request(tourist_id)
            .map_err(|e| self.reject(e))?;

        self.submitting = true;

        Ok(request)
    }

    /// Record the outcome of a submission started with [`Self::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<TripDto, ApiError>) -> Result<TripDto, ApiError> {
        self.submitting = false;

        match result {
            Ok(trip) => {
                tracing::info!(trip_id = %trip.id, "Trip request submitted");

                self.step = WizardStep::Success;
                self.notices
                    .push(Notice::success("Your trip request has been sent."));

                Ok(trip)
            }
            Err(e) => {
                self.report(e.clone());

                Err(e)
            }
        }
    }

    /* Step 5: success */

    /// Tourist whose remote selection should be emptied after a successful submission
    pub fn begin_clear_selection(&mut self) -> Result<i64, Error> {
        if self.step != WizardStep::Success {
            return Err(self
                .reject(WizardError::InvalidTransition {
                    step: self.step,
                    action: "clear the selection",
                })
                .into());
        }

        Ok(self.tourist_id()?)
    }

    pub fn apply_clear_selection(&mut self, result: Result<(), ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.board.selected.clear();

                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to clear selected destinations: {}", e);

                Err(e)
            }
        }
    }

    /* Composed operations */

    pub async fn load<T: HttpTransport>(&mut self, api: &ApiClient<T>) -> Result<(), Error> {
        let tourist_id = self.begin_load()?;
        let load = BoardLoad::fetch(api, tourist_id).await;
        self.apply_load(load);

        Ok(())
    }

    pub async fn add_to_selection<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        destination_id: i64,
    ) -> Result<(), Error> {
        let Some(change) = self.request_add(destination_id)? else {
            return Ok(());
        };

        let result = api
            .save_selected_destinations(change.tourist_id, &change.destination_ids)
            .await;

        Ok(self.apply_selection(change, result)?)
    }

    pub async fn remove_from_selection<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        destination_id: i64,
    ) -> Result<(), Error> {
        let Some(change) = self.request_remove_selected(destination_id)? else {
            return Ok(());
        };

        let result = api
            .save_selected_destinations(change.tourist_id, &change.destination_ids)
            .await;

        Ok(self.apply_selection(change, result)?)
    }

    pub async fn remove_from_wishlist<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        destination_id: i64,
    ) -> Result<(), Error> {
        let Some(removal) = self.request_remove_wishlist(destination_id)? else {
            return Ok(());
        };

        let result = api
            .remove_from_wishlist(removal.tourist_id, removal.destination_id)
            .await;

        Ok(self.apply_wishlist_removal(removal, result)?)
    }

    pub async fn load_guides<T: HttpTransport>(&mut self, api: &ApiClient<T>) -> Result<(), Error> {
        self.begin_guides();
        let result = GuideDirectory::fetch(api).await;

        Ok(self.apply_guides(result)?)
    }

    /// Submit the trip request, sending exactly one request per call
    pub async fn confirm<T: HttpTransport>(&mut self, api: &ApiClient<T>) -> Result<TripDto, Error> {
        let request = self.begin_submit()?;
        let result = api.create_trip(&request).await;

        Ok(self.finish_submit(result)?)
    }

    /// Empty the tourist's remote selection once the trip has been submitted
    pub async fn clear_selection<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
    ) -> Result<(), Error> {
        let tourist_id = self.begin_clear_selection()?;
        let result = api.save_selected_destinations(tourist_id, &[]).await;

        Ok(self.apply_clear_selection(result)?)
    }
}
