//! Outbound REST API access.
//!
//! [`ApiClient`] owns request construction, credentials and status handling; the
//! endpoint groups below add one method per remote operation.

pub mod auth;
pub mod client;
pub mod destination;
pub mod guide;
pub mod tourist;
pub mod transport;
pub mod trip;
pub mod wishlist;

pub use client::ApiClient;
pub use transport::{HttpTransport, PlatformTransport};

/// Client type used by the application on the current platform
pub type PlatformClient = ApiClient<PlatformTransport>;
