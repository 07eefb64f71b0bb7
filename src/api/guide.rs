use crate::{
    api::{transport::HttpTransport, transport::Method, ApiClient},
    error::api::ApiError,
    model::guide::{TourGuideDto, TourGuideProfileDto},
};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_tour_guides(&self) -> Result<Vec<TourGuideDto>, ApiError> {
        self.get("/users/tour-guides").await
    }

    /// Replace the profile fields of the tour guide owning `user_id`
    pub async fn update_tour_guide_profile(
        &self,
        user_id: i64,
        profile: &TourGuideProfileDto,
    ) -> Result<(), ApiError> {
        self.submit(
            Method::Patch,
            &format!("/tour-guide/{}/profile", user_id),
            profile,
        )
        .await
    }

    pub async fn delete_tour_guide(&self, tour_guide_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/tour-guide/delete-tour-guide/{}", tour_guide_id))
            .await
    }
}
