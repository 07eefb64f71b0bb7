//! Tours a guide has accepted, is leading, or has finished.

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, HttpTransport},
    error::api::ApiError,
    model::{
        notice::{IntoNotice, Notice},
        trip::{PaymentStatus, TripDto, TripStatus},
    },
};

/// Outcome of loading the accepted and started trips together
pub type ToursLoad = (Result<Vec<TripDto>, ApiError>, Result<Vec<TripDto>, ApiError>);

/// Trips a guide still has to start or finish
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTours {
    pub trips: Vec<TripDto>,
    pub loading: bool,
    /// Trip whose status or payment is being sent
    updating: Option<i64>,
}

impl Default for ActiveTours {
    fn default() -> Self {
        Self {
            trips: Vec::new(),
            loading: true,
            updating: None,
        }
    }
}

/// The status a guide can move a trip on to, `None` once there is nothing left to do
pub fn next_status(status: &TripStatus) -> Option<TripStatus> {
    match status {
        TripStatus::Accepted => Some(TripStatus::Started),
        TripStatus::Started => Some(TripStatus::Completed),
        _ => None,
    }
}

impl ActiveTours {
    pub async fn fetch<T: HttpTransport>(api: &ApiClient<T>, tour_guide_id: i64) -> ToursLoad {
        futures::join!(
            api.guide_accepted_trips(tour_guide_id),
            api.guide_started_trips(tour_guide_id),
        )
    }

    /// Record both lists, started trips first
    pub fn apply(&mut self, (accepted, started): ToursLoad) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut trips = Vec::new();

        for result in [started, accepted] {
            match result {
                Ok(found) => trips.extend(found),
                Err(e) => notices.push(e.into_notice()),
            }
        }
        self.trips = trips;
        self.loading = false;

        notices
    }

    pub fn is_updating(&self, trip_id: i64) -> bool {
        self.updating == Some(trip_id)
    }

    fn trip(&self, trip_id: i64) -> Option<&TripDto> {
        self.trips.iter().find(|t| t.id == trip_id)
    }

    /// Mark a status change as in flight and return the status to send
    pub fn begin_status(&mut self, trip_id: i64) -> Option<TripStatus> {
        if self.updating.is_some() {
            return None;
        }
        let status = next_status(&self.trip(trip_id)?.trip_status)?;
        self.updating = Some(trip_id);

        Some(status)
    }

    /// Record the API's answer, a completed trip leaves the list
    pub fn finish_status(
        &mut self,
        trip_id: i64,
        status: TripStatus,
        result: Result<TripDto, ApiError>,
    ) -> Notice {
        self.updating = None;

        match result {
            Ok(_) => {
                tracing::info!(trip_id = %trip_id, status = %status, "Trip status updated");

                let message = format!("Trip status updated to \"{}\".", status);
                if status == TripStatus::Completed {
                    self.trips.retain(|t| t.id != trip_id);
                } else if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
                    trip.trip_status = status;
                }

                Notice::success(message)
            }
            Err(e) => {
                tracing::warn!(trip_id = %trip_id, "Failed to update trip status: {}", e);

                Notice::error("Failed to update trip status.")
            }
        }
    }

    /// Mark a trip as being paid, `false` when it is already paid or another update is in flight
    pub fn begin_payment(&mut self, trip_id: i64) -> bool {
        if self.updating.is_some() {
            return false;
        }
        match self.trip(trip_id) {
            Some(trip) if trip.payment_status != PaymentStatus::Paid => {
                self.updating = Some(trip_id);
                true
            }
            _ => false,
        }
    }

    pub fn finish_payment(&mut self, trip_id: i64, result: Result<(), ApiError>) -> Notice {
        self.updating = None;

        match result {
            Ok(()) => {
                if let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) {
                    trip.payment_status = PaymentStatus::Paid;
                }

                Notice::success(format!("Payment status updated to \"{}\".", PaymentStatus::Paid))
            }
            Err(e) => {
                tracing::warn!(trip_id = %trip_id, "Failed to update payment status: {}", e);

                Notice::error("Failed to update payment status.")
            }
        }
    }

    /// Move a trip on to its next status
    pub async fn advance<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        trip_id: i64,
    ) -> Option<Notice> {
        let status = self.begin_status(trip_id)?;
        let result = api.update_trip_status(trip_id, status.clone()).await;

        Some(self.finish_status(trip_id, status, result))
    }

    pub async fn mark_paid<T: HttpTransport>(
        &mut self,
        api: &ApiClient<T>,
        trip_id: i64,
    ) -> Option<Notice> {
        if !self.begin_payment(trip_id) {
            return None;
        }
        let result = api.update_payment_status(trip_id, PaymentStatus::Paid).await;

        Some(self.finish_payment(trip_id, result))
    }
}

/// Sum of the payments of paid trips
pub fn total_earnings(trips: &[TripDto]) -> f64 {
    trips
        .iter()
        .filter(|t| t.payment_status == PaymentStatus::Paid)
        .map(|t| t.trip_payment)
        .sum()
}
