use crate::{
    api::{transport::HttpTransport, transport::Method, ApiClient},
    error::api::ApiError,
    model::{
        guide::TourGuideRegistrationDto,
        tourist::TouristRegistrationDto,
        user::{LoginForm, TokenDto},
    },
};

impl<T: HttpTransport> ApiClient<T> {
    /// Exchange credentials for an access token using the OAuth2 password flow
    pub async fn login(&self, credentials: &LoginForm) -> Result<TokenDto, ApiError> {
        self.post_form("/auth/token", credentials).await
    }

    /// Create a tourist account, the new tourist signs in afterwards
    pub async fn register_tourist(&self, registration: &TouristRegistrationDto) -> Result<(), ApiError> {
        self.submit(Method::Post, "/auth/register/tourist", registration)
            .await
    }

    pub async fn register_tour_guide(
        &self,
        registration: &TourGuideRegistrationDto,
    ) -> Result<(), ApiError> {
        self.submit(Method::Post, "/auth/register/guide", registration)
            .await
    }
}
