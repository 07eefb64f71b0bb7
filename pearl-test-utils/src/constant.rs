//! Identifiers shared by the test fixtures.
//!
//! The ids mirror how the API assigns them: a tour guide's id equals the user id in
//! their access token.

/// User id of the tourist signed in by [`token::tourist`](crate::fixtures::token::tourist)
pub static TEST_TOURIST_ID: i64 = 1;

/// User id of the tour guide signed in by [`token::tour_guide`](crate::fixtures::token::tour_guide)
pub static TEST_GUIDE_ID: i64 = 7;

pub static TEST_ADMIN_ID: i64 = 42;

/// Expiry put into minted tokens, far enough in the future to never lapse during tests
pub static TEST_TOKEN_EXP: i64 = 4_102_444_800;
