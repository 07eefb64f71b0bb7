use crate::{
    api::{transport::HttpTransport, transport::Method, ApiClient},
    error::api::ApiError,
    model::trip::{
        ActiveTripDto, PaymentStatus, PaymentStatusUpdateDto, TripDto, TripRequestDto, TripStatus,
        TripStatusUpdateDto,
    },
};

impl<T: HttpTransport> ApiClient<T> {
    /// Submit a new trip request
    pub async fn create_trip(&self, trip: &TripRequestDto) -> Result<TripDto, ApiError> {
        self.post("/trips/add", trip).await
    }

    pub async fn list_trips(&self) -> Result<Vec<TripDto>, ApiError> {
        self.get("/trips/").await
    }

    pub async fn tourist_has_active_trip(&self, tourist_id: i64) -> Result<bool, ApiError> {
        let active: Option<ActiveTripDto> = self
            .get_optional(&format!("/trips/tourist/{}/has-active-trip", tourist_id))
            .await?;

        Ok(active.is_some_and(|active| active.has_active_trip()))
    }

    /// Trips of a tourist that a guide has accepted, empty when there are none
    pub async fn tourist_accepted_trips(&self, tourist_id: i64) -> Result<Vec<TripDto>, ApiError> {
        let trips: Option<Vec<TripDto>> = self
            .get_optional(&format!("/trips/trip-by-tourist/{}/accepted", tourist_id))
            .await?;

        Ok(trips.unwrap_or_default())
    }

    /// Finished trips of a tourist, empty when there are none
    pub async fn tourist_completed_trips(&self, tourist_id: i64) -> Result<Vec<TripDto>, ApiError> {
        self.trips_or_empty(&format!("/trips/trip-by-tourist/{}/completed", tourist_id))
            .await
    }

    /// Trip requests waiting for a tour guide's decision
    pub async fn guide_pending_trips(&self, tour_guide_id: i64) -> Result<Vec<TripDto>, ApiError> {
        let trips: Option<Vec<TripDto>> = self
            .get_optional(&format!("/trips/tour-guide/{}/pending", tour_guide_id))
            .await?;

        Ok(trips.unwrap_or_default())
    }

    pub async fn guide_accepted_trips(&self, tour_guide_id: i64) -> Result<Vec<TripDto>, ApiError> {
        self.trips_or_empty(&format!("/trips/tour-guide/{}/accepted", tour_guide_id))
            .await
    }

    pub async fn guide_started_trips(&self, tour_guide_id: i64) -> Result<Vec<TripDto>, ApiError> {
        self.trips_or_empty(&format!("/trips/tour-guide/{}/started", tour_guide_id))
            .await
    }

    pub async fn guide_completed_trips(&self, tour_guide_id: i64) -> Result<Vec<TripDto>, ApiError> {
        self.trips_or_empty(&format!("/trips/tour-guide/{}/completed", tour_guide_id))
            .await
    }

    async fn trips_or_empty(&self, path: &str) -> Result<Vec<TripDto>, ApiError> {
        let trips: Option<Vec<TripDto>> = self.get_optional(path).await?;

        Ok(trips.unwrap_or_default())
    }

    pub async fn guide_has_active_trip(&self, tour_guide_id: i64) -> Result<bool, ApiError> {
        let active: Option<ActiveTripDto> = self
            .get_optional(&format!("/trips/tour-guide/{}/has-active-trip", tour_guide_id))
            .await?;

        Ok(active.is_some_and(|active| active.has_active_trip()))
    }

    pub async fn update_trip_status(
        &self,
        trip_id: i64,
        trip_status: TripStatus,
    ) -> Result<TripDto, ApiError> {
        self.patch(
            &format!("/trips/{}/update-trip-status", trip_id),
            &TripStatusUpdateDto { trip_status },
        )
        .await
    }

    pub async fn update_payment_status(
        &self,
        trip_id: i64,
        payment_status: PaymentStatus,
    ) -> Result<(), ApiError> {
        self.submit(
            Method::Patch,
            &format!("/trips/{}/update-payment-status", trip_id),
            &PaymentStatusUpdateDto { payment_status },
        )
        .await
    }
}
