//! Destination browsing for tourists and adding destinations to the dream list.

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, HttpTransport},
    error::api::ApiError,
    model::{destination::DestinationDto, notice::Notice},
};

/// Narrowing of the catalog, a blank filter matches everything
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub kind: String,
    pub province: String,
    pub activity: String,
}

impl CatalogFilter {
    pub fn matches(&self, destination: &DestinationDto) -> bool {
        fn same(filter: &str, value: &str) -> bool {
            filter.is_empty() || filter.eq_ignore_ascii_case(value)
        }

        same(&self.kind, &destination.kind)
            && same(&self.province, &destination.province)
            && (self.activity.is_empty()
                || destination
                    .activities
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(&self.activity)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DestinationCatalog {
    pub destinations: Vec<DestinationDto>,
    pub filter: CatalogFilter,
    pub loading: bool,
    pub failed: bool,
    /// Destination currently being added to the dream list
    adding: Option<i64>,
}

impl Default for DestinationCatalog {
    fn default() -> Self {
        Self {
            destinations: Vec::new(),
            filter: CatalogFilter::default(),
            loading: true,
            failed: false,
            adding: None,
        }
    }
}

impl DestinationCatalog {
    pub fn apply(&mut self, result: Result<Vec<DestinationDto>, ApiError>) -> Option<Notice> {
        self.loading = false;

        match result {
            Ok(destinations) => {
                self.destinations = destinations;
                self.failed = false;

                None
            }
            Err(e) => {
                tracing::error!("Failed to load destinations: {}", e);
                self.failed = true;

                Some(Notice::error("Destinations could not be loaded."))
            }
        }
    }

    /// Destinations passing the current filter, in API order
    pub fn visible(&self) -> Vec<&DestinationDto> {
        self.destinations
            .iter()
            .filter(|d| self.filter.matches(d))
            .collect()
    }

    pub fn is_adding(&self, destination_id: i64) -> bool {
        self.adding == Some(destination_id)
    }

    /// Mark an add as in flight, `false` while another add is being sent
    pub fn begin_add(&mut self, destination_id: i64) -> bool {
        if self.adding.is_some() {
            return false;
        }

        self.adding = Some(destination_id);
        true
    }

    pub fn finish_add(&mut self) {
        self.adding = None;
    }
}

/// Add a destination to the tourist's dream list and describe the outcome
pub async fn add_to_dream_list<T: HttpTransport>(
    api: &ApiClient<T>,
    tourist_id: i64,
    destination: &DestinationDto,
) -> Notice {
    match api.add_to_wishlist(tourist_id, destination.id).await {
        Ok(true) => {
            tracing::info!(tourist_id = %tourist_id, destination_id = %destination.id, "Added destination to dream list");

            Notice::success(format!("{} added to your Dream List!", destination.name))
        }
        Ok(false) => Notice::info(format!("{} is already in your Dream List", destination.name)),
        Err(e) => {
            tracing::warn!(destination_id = %destination.id, "Failed to update dream list: {}", e);

            Notice::error(format!("Failed to add {} to Dream List", destination.name))
        }
    }
}
