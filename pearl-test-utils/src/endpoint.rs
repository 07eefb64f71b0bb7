//! Mock endpoints of the REST API.
//!
//! Each helper registers one endpoint answering with a fixture body and expecting to be
//! called `expected_requests` times.

use mockito::Mock;
use serde_json::{json, Value};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn with_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(body)?)
            .expect(expected_requests)
            .create())
    }

    fn not_found(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"Not Found"}"#)
            .expect(expected_requests)
            .create()
    }

    /// Wishlist of a tourist, a missing wishlist answers 404
    pub fn with_wishlist_endpoint(
        &mut self,
        tourist_id: i64,
        wishlist: Option<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/wishlist/{}", tourist_id);

        match wishlist {
            Some(wishlist) => self.with_json_endpoint("GET", &path, 200, &wishlist, expected_requests),
            None => Ok(self.not_found(&path, expected_requests)),
        }
    }

    /// Selection set of a tourist, a missing set answers 404
    pub fn with_selected_destinations_endpoint(
        &mut self,
        tourist_id: i64,
        selection: Option<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let path = format!("/selected-destinations/{}", tourist_id);

        match selection {
            Some(selection) => {
                self.with_json_endpoint("GET", &path, 200, &selection, expected_requests)
            }
            None => Ok(self.not_found(&path, expected_requests)),
        }
    }

    pub fn with_destination_endpoint(
        &mut self,
        destination: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let id = destination["id"]
            .as_i64()
            .ok_or_else(|| TestError::MissingId(destination.to_string()))?;

        self.with_json_endpoint(
            "GET",
            &format!("/destinations/destination/{}", id),
            200,
            destination,
            expected_requests,
        )
    }

    pub fn with_active_trip_endpoint(
        &mut self,
        tourist_id: i64,
        has_active_trip: bool,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        self.with_json_endpoint(
            "GET",
            &format!("/trips/tourist/{}/has-active-trip", tourist_id),
            200,
            &json!({ "has_active_trip": has_active_trip }),
            expected_requests,
        )
    }

    pub fn with_accepted_trips_endpoint(
        &mut self,
        tourist_id: i64,
        trips: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        self.with_json_endpoint(
            "GET",
            &format!("/trips/trip-by-tourist/{}/accepted", tourist_id),
            200,
            &Value::Array(trips),
            expected_requests,
        )
    }

    pub fn with_tour_guides_endpoint(
        &mut self,
        guides: Vec<Value>,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        self.with_json_endpoint(
            "GET",
            "/users/tour-guides",
            200,
            &Value::Array(guides),
            expected_requests,
        )
    }
}
