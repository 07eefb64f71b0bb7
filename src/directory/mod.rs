pub mod rating;

use crate::{
    api::{ApiClient, HttpTransport},
    error::api::ApiError,
    model::guide::TourGuideDto,
};

use self::rating::Reputation;

/// Load state of the tour guide directory
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GuideDirectory {
    #[default]
    Loading,
    Loaded(Vec<TourGuideDto>),
    Failed(String),
}

impl GuideDirectory {
    pub async fn fetch<T: HttpTransport>(api: &ApiClient<T>) -> Result<Vec<TourGuideDto>, ApiError> {
        api.list_tour_guides().await
    }

    /// Record the outcome of a directory fetch
    pub fn apply(&mut self, result: &Result<Vec<TourGuideDto>, ApiError>) {
        *self = match result {
            Ok(guides) => Self::Loaded(guides.clone()),
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    pub fn guides(&self) -> &[TourGuideDto] {
        match self {
            Self::Loaded(guides) => guides,
            _ => &[],
        }
    }

    pub fn find(&self, guide_id: i64) -> Option<&TourGuideDto> {
        self.guides().iter().find(|guide| guide.id == guide_id)
    }
}

pub fn reputation(guide: &TourGuideDto) -> Reputation {
    Reputation::new(guide.rating, guide.review_count)
}
