use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    api::{transport::HttpTransport, transport::Method, ApiClient},
    error::api::ApiError,
    model::destination::{DestinationDto, DestinationPayload},
};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn list_destinations(&self) -> Result<Vec<DestinationDto>, ApiError> {
        self.get("/destinations/").await
    }

    pub async fn get_destination(&self, destination_id: i64) -> Result<DestinationDto, ApiError> {
        self.get(&format!("/destinations/destination/{}", destination_id))
            .await
    }

    /// Resolve destination ids to their records, preserving the order of `ids`.
    ///
    /// Ids that fail to resolve are logged and left out rather than failing the batch.
    pub async fn resolve_destinations(&self, ids: &[i64]) -> Vec<DestinationDto> {
        let results = join_all(ids.iter().map(|id| self.get_destination(*id))).await;

        ids.iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(destination) => Some(destination),
                Err(e) => {
                    tracing::warn!(destination_id = %id, "Dropping unresolvable destination: {}", e);
                    None
                }
            })
            .collect()
    }

    pub async fn create_destination(&self, destination: &DestinationPayload) -> Result<(), ApiError> {
        self.submit(Method::Post, "/destinations/add", destination)
            .await
    }

    pub async fn update_destination(
        &self,
        destination_id: i64,
        destination: &DestinationPayload,
    ) -> Result<(), ApiError> {
        self.submit(
            Method::Patch,
            &format!("/destinations/update_destination/{}", destination_id),
            destination,
        )
        .await
    }

    pub async fn delete_destination(&self, destination_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/destinations/delete_destination/{}", destination_id))
            .await
    }
}
