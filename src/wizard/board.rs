use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, HttpTransport},
    error::api::ApiError,
    model::{
        destination::{DestinationDto, DestinationSummary},
        notice::{IntoNotice, Notice},
        trip::TripDto,
    },
};

/// Results of the independent fetches backing the destination step
#[derive(Clone, Debug)]
pub struct BoardLoad {
    pub wishlist: Result<Vec<DestinationDto>, ApiError>,
    pub selected: Result<Vec<DestinationDto>, ApiError>,
    pub has_active_trip: Result<bool, ApiError>,
    pub active_trips: Result<Vec<TripDto>, ApiError>,
}

impl BoardLoad {
    /// Fetch the wishlist, selection, and active trip state of a tourist concurrently.
    ///
    /// A failing fetch only fails its own slice; the others are still returned.
    pub async fn fetch<T: HttpTransport>(api: &ApiClient<T>, tourist_id: i64) -> Self {
        let (wishlist, selected, has_active_trip, active_trips) = futures::join!(
            api.get_wishlist(tourist_id),
            api.get_selected_destinations(tourist_id),
            api.tourist_has_active_trip(tourist_id),
            api.tourist_accepted_trips(tourist_id),
        );

        let wishlist_ids = match wishlist {
            Ok(wishlist) => Ok(wishlist.map(|w| w.destinations).unwrap_or_default()),
            Err(e) => Err(e),
        };
        let selected_ids = match selected {
            Ok(selection) => Ok(selection.map(|s| s.selected_destinations).unwrap_or_default()),
            Err(e) => Err(e),
        };

        let (wishlist, selected) = futures::join!(
            resolve(api, wishlist_ids),
            resolve(api, selected_ids),
        );

        Self {
            wishlist,
            selected,
            has_active_trip,
            active_trips,
        }
    }
}

async fn resolve<T: HttpTransport>(
    api: &ApiClient<T>,
    ids: Result<Vec<i64>, ApiError>,
) -> Result<Vec<DestinationDto>, ApiError> {
    match ids {
        Ok(ids) => Ok(api.resolve_destinations(&ids).await),
        Err(e) => Err(e),
    }
}

/// Everything shown on the destination selection step
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationBoard {
    pub wishlist: Vec<DestinationDto>,
    pub selected: Vec<DestinationDto>,
    pub active_trips: Vec<TripDto>,
    pub has_active_trip: bool,
    pub loading: bool,
}

impl Default for DestinationBoard {
    fn default() -> Self {
        Self {
            wishlist: Vec::new(),
            selected: Vec::new(),
            active_trips: Vec::new(),
            has_active_trip: false,
            loading: true,
        }
    }
}

impl DestinationBoard {
    /// Apply the results of [`BoardLoad::fetch`], returning a notice per failed fetch
    pub fn apply(&mut self, load: BoardLoad) -> Vec<Notice> {
        let mut notices = Vec::new();

        match load.wishlist {
            Ok(wishlist) => self.wishlist = wishlist,
            Err(e) => notices.push(e.into_notice()),
        }
        match load.selected {
            Ok(selected) => self.selected = selected,
            Err(e) => notices.push(e.into_notice()),
        }
        match load.has_active_trip {
            Ok(has_active_trip) => self.has_active_trip = has_active_trip,
            Err(e) => notices.push(e.into_notice()),
        }
        match load.active_trips {
            Ok(trips) => self.active_trips = trips,
            Err(e) => notices.push(e.into_notice()),
        }

        tracing::debug!(
            wishlist = self.wishlist.len(),
            selected = self.selected.len(),
            has_active_trip = self.has_active_trip,
            "Loaded destination board"
        );

        self.loading = false;

        notices
    }

    pub fn is_selected(&self, destination_id: i64) -> bool {
        self.selected.iter().any(|d| d.id == destination_id)
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selected.iter().map(|d| d.id).collect()
    }

    pub fn wishlist_entry(&self, destination_id: i64) -> Option<&DestinationDto> {
        self.wishlist.iter().find(|d| d.id == destination_id)
    }

    /// Whether the tourist is blocked from planning a new trip
    pub fn is_blocked(&self) -> bool {
        self.has_active_trip || self.active_trips.iter().any(|t| t.trip_status.is_active())
    }

    pub fn selection_summary(&self) -> Vec<DestinationSummary> {
        self.selected.iter().map(DestinationSummary::from).collect()
    }
}
