pub mod account;
pub mod active_tours;
pub mod chat;
pub mod completed_tours;
pub mod requests;

pub use account::GuideAccount;
pub use active_tours::ActiveTours;
pub use chat::GuideChat;
pub use completed_tours::CompletedTours;
pub use requests::TourRequests;
