use crate::{
    api::{transport::HttpTransport, ApiClient},
    error::api::ApiError,
    model::wishlist::{
        NewSelectedDestinationsDto, NewWishlistDto, SelectedDestinationsDto, WishlistDto,
    },
};

impl<T: HttpTransport> ApiClient<T> {
    /// Retrieve a tourist's wishlist, `None` when they have never added a destination
    pub async fn get_wishlist(&self, tourist_id: i64) -> Result<Option<WishlistDto>, ApiError> {
        self.get_optional(&format!("/wishlist/{}", tourist_id)).await
    }

    pub async fn create_wishlist(&self, wishlist: &NewWishlistDto) -> Result<WishlistDto, ApiError> {
        self.post("/wishlist/add", wishlist).await
    }

    /// Replace the destination ids of a wishlist
    pub async fn update_wishlist(
        &self,
        wishlist_id: i64,
        destinations: &[i64],
    ) -> Result<WishlistDto, ApiError> {
        self.patch(
            &format!("/wishlist/{}/update-destinations", wishlist_id),
            &destinations,
        )
        .await
    }

    /// Add a destination to a tourist's wishlist, creating the wishlist on first use
    ///
    /// # Returns
    /// - `Ok(true)` - The destination was added
    /// - `Ok(false)` - The destination was already on the wishlist, nothing was sent
    pub async fn add_to_wishlist(&self, tourist_id: i64, destination_id: i64) -> Result<bool, ApiError> {
        match self.get_wishlist(tourist_id).await? {
            Some(wishlist) if wishlist.destinations.contains(&destination_id) => Ok(false),
            Some(wishlist) => {
                let mut destinations = wishlist.destinations;
                destinations.push(destination_id);

                self.update_wishlist(wishlist.id, &destinations).await?;

                Ok(true)
            }
            None => {
                self.create_wishlist(&NewWishlistDto {
                    tourist_id,
                    destinations: vec![destination_id],
                })
                .await?;

                Ok(true)
            }
        }
    }

    /// Remove a destination from a tourist's wishlist, a missing wishlist is left as is
    pub async fn remove_from_wishlist(
        &self,
        tourist_id: i64,
        destination_id: i64,
    ) -> Result<(), ApiError> {
        if let Some(wishlist) = self.get_wishlist(tourist_id).await? {
            let destinations: Vec<i64> = wishlist
                .destinations
                .into_iter()
                .filter(|id| *id != destination_id)
                .collect();

            self.update_wishlist(wishlist.id, &destinations).await?;
        }

        Ok(())
    }

    pub async fn get_selected_destinations(
        &self,
        tourist_id: i64,
    ) -> Result<Option<SelectedDestinationsDto>, ApiError> {
        self.get_optional(&format!("/selected-destinations/{}", tourist_id))
            .await
    }

    pub async fn create_selected_destinations(
        &self,
        selection: &NewSelectedDestinationsDto,
    ) -> Result<SelectedDestinationsDto, ApiError> {
        self.post("/selected-destinations/add", selection).await
    }

    /// Replace the destination ids of a selection set
    pub async fn update_selected_destinations(
        &self,
        selection_id: i64,
        destinations: &[i64],
    ) -> Result<SelectedDestinationsDto, ApiError> {
        self.patch(
            &format!(
                "/selected-destinations/{}/updated-selected-destinations",
                selection_id
            ),
            &destinations,
        )
        .await
    }

    /// Store the full list of selected destination ids for a tourist.
    ///
    /// The remote set is looked up first: it is replaced when it exists and created
    /// otherwise. An empty list never creates a new set.
    pub async fn save_selected_destinations(
        &self,
        tourist_id: i64,
        destinations: &[i64],
    ) -> Result<(), ApiError> {
        match self.get_selected_destinations(tourist_id).await? {
            Some(selection) => {
                self.update_selected_destinations(selection.id, destinations)
                    .await?;
            }
            None if destinations.is_empty() => (),
            None => {
                self.create_selected_destinations(&NewSelectedDestinationsDto {
                    tourist_id,
                    selected_destinations: destinations.to_vec(),
                })
                .await?;
            }
        }

        Ok(())
    }
}
