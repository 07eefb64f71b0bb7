use crate::{
    api::{transport::HttpTransport, transport::Method, ApiClient},
    error::api::ApiError,
    model::tourist::{TouristProfileDto, TouristProfileUpdateDto},
};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn get_tourist_profile(&self, tourist_id: i64) -> Result<TouristProfileDto, ApiError> {
        self.get(&format!("/tourists/{}/profile", tourist_id)).await
    }

    /// Replace the editable profile fields of a tourist
    pub async fn update_tourist_profile(
        &self,
        tourist_id: i64,
        profile: &TouristProfileUpdateDto,
    ) -> Result<(), ApiError> {
        self.submit(
            Method::Put,
            &format!("/tourists/{}/profile", tourist_id),
            profile,
        )
        .await
    }
}
