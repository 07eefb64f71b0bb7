pub mod tours;

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, HttpTransport},
    error::api::ApiError,
    model::{
        notice::{IntoNotice, Notice},
        trip::{TripDto, TripStatus},
    },
};

/// Trip requests waiting for a tour guide's decision
#[derive(Clone, Debug, PartialEq)]
pub struct TripRequests {
    pub pending: Vec<TripDto>,
    pub has_active_trip: bool,
    pub loading: bool,
    /// Trip whose decision is being sent
    pub deciding: Option<i64>,
}

impl Default for TripRequests {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            has_active_trip: false,
            loading: true,
            deciding: None,
        }
    }
}

/// Outcome of loading the guide's pending requests and active trip flag together
pub type RequestsLoad = (Result<Vec<TripDto>, ApiError>, Result<bool, ApiError>);

impl TripRequests {
    pub async fn fetch<T: HttpTransport>(api: &ApiClient<T>, tour_guide_id: i64) -> RequestsLoad {
        futures::join!(
            api.guide_pending_trips(tour_guide_id),
            api.guide_has_active_trip(tour_guide_id),
        )
    }

    pub fn apply(&mut self, (pending, has_active_trip): RequestsLoad) -> Vec<Notice> {
        let mut notices = Vec::new();

        match pending {
            Ok(pending) => self.pending = pending,
            Err(e) => notices.push(e.into_notice()),
        }
        match has_active_trip {
            Ok(flag) => self.has_active_trip = flag,
            Err(e) => notices.push(e.into_notice()),
        }
        self.loading = false;

        notices
    }

    /// A guide leading a trip cannot take on another one
    pub fn can_accept(&self) -> bool {
        !self.has_active_trip && self.deciding.is_none()
    }

    /// Mark a decision as in flight.
    ///
    /// Returns `None` when the trip is not pending, another decision is in flight, or
    /// the guide cannot accept right now.
    pub fn begin_decision(&mut self, trip_id: i64, status: &TripStatus) -> Option<i64> {
        if self.deciding.is_some() || !self.pending.iter().any(|t| t.id == trip_id) {
            return None;
        }
        if *status == TripStatus::Accepted && !self.can_accept() {
            return None;
        }

        self.deciding = Some(trip_id);

        Some(trip_id)
    }

    /// Record the API's answer, a decided request leaves the list
    pub fn apply_decision(
        &mut self,
        trip_id: i64,
        status: &TripStatus,
        result: Result<TripDto, ApiError>,
    ) -> Notice {
        self.deciding = None;

        match result {
            Ok(_) => {
                tracing::info!(trip_id = %trip_id, status = %status, "Trip request decided");

                self.pending.retain(|t| t.id != trip_id);
                if *status == TripStatus::Accepted {
                    self.has_active_trip = true;
                }

                Notice::success(format!(
                    "Request has been {}.",
                    status.as_str().to_lowercase()
                ))
            }
            Err(e) => e.into_notice(),
        }
    }

    /// Accept or reject a pending request
    pub async fn decide<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        trip_id: i64,
        status: TripStatus,
    ) -> Option<Notice> {
        let trip_id = self.begin_decision(trip_id, &status)?;
        let result = api.update_trip_status(trip_id, status.clone()).await;

        Some(self.apply_decision(trip_id, &status, result))
    }
}
