//! Declarative setup of the mock API.
//!
//! The `TestBuilder` queues endpoints which are all registered on a fresh mock server
//! during the final `build()` call.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::factory::{selected_destinations, wishlist},
    TestSetup,
};

type EndpointFn = Box<dyn FnOnce(&mut TestSetup) -> Result<Mock, TestError>>;

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()`.
///
/// # Example
///
/// ```no_run
/// use pearl_test_utils::prelude::*;
///
/// # async fn example() -> Result<(), TestError> {
/// let test = TestBuilder::new()
///     .with_no_wishlist(TEST_TOURIST_ID, 1)
///     .with_active_trip(TEST_TOURIST_ID, false, 1)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct TestBuilder {
    // Custom endpoints, registered before the shortcuts below
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,
    endpoints: Vec<EndpointFn>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn endpoint<F>(mut self, endpoint: F) -> Self
    where
        F: FnOnce(&mut TestSetup) -> Result<Mock, TestError> + 'static,
    {
        self.endpoints.push(Box::new(endpoint));
        self
    }

    /// Register a tourist's wishlist holding `destination_ids`
    pub fn with_wishlist(self, tourist_id: i64, destination_ids: &[i64], expected_requests: usize) -> Self {
        let body = wishlist(tourist_id * 10, tourist_id, destination_ids);

        self.endpoint(move |setup| {
            setup.with_wishlist_endpoint(tourist_id, Some(body), expected_requests)
        })
    }

    pub fn with_no_wishlist(self, tourist_id: i64, expected_requests: usize) -> Self {
        self.endpoint(move |setup| setup.with_wishlist_endpoint(tourist_id, None, expected_requests))
    }

    /// Register a tourist's selection set holding `destination_ids`
    pub fn with_selection(self, tourist_id: i64, destination_ids: &[i64], expected_requests: usize) -> Self {
        let body = selected_destinations(tourist_id * 100, tourist_id, destination_ids);

        self.endpoint(move |setup| {
            setup.with_selected_destinations_endpoint(tourist_id, Some(body), expected_requests)
        })
    }

    pub fn with_no_selection(self, tourist_id: i64, expected_requests: usize) -> Self {
        self.endpoint(move |setup| {
            setup.with_selected_destinations_endpoint(tourist_id, None, expected_requests)
        })
    }

    /// Register the lookup endpoint of every destination
    pub fn with_destinations(mut self, destinations: Vec<Value>, expected_requests: usize) -> Self {
        for destination in destinations {
            self = self.endpoint(move |setup| {
                setup.with_destination_endpoint(&destination, expected_requests)
            });
        }
        self
    }

    pub fn with_active_trip(self, tourist_id: i64, has_active_trip: bool, expected_requests: usize) -> Self {
        self.endpoint(move |setup| {
            setup.with_active_trip_endpoint(tourist_id, has_active_trip, expected_requests)
        })
    }

    pub fn with_accepted_trips(self, tourist_id: i64, trips: Vec<Value>, expected_requests: usize) -> Self {
        self.endpoint(move |setup| {
            setup.with_accepted_trips_endpoint(tourist_id, trips, expected_requests)
        })
    }

    pub fn with_tour_guides(self, guides: Vec<Value>, expected_requests: usize) -> Self {
        self.endpoint(move |setup| setup.with_tour_guides_endpoint(guides, expected_requests))
    }

    /// Add a custom mock endpoint.
    ///
    /// Custom endpoints are created first so tests can queue several mocks for the same
    /// path, such as an error followed by a success.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await;

        for builder in self.mock_builders {
            let mock = builder(&mut setup.server);
            setup.mocks.push(mock);
        }

        for endpoint in self.endpoints {
            let mock = endpoint(&mut setup)?;
            setup.mocks.push(mock);
        }

        Ok(setup)
    }
}
