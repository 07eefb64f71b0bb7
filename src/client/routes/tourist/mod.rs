pub mod account;
pub mod chat;
pub mod destination_detail;
pub mod destinations;
pub mod home;
pub mod plan_trip;
pub mod trips;

pub use account::TouristAccount;
pub use chat::TouristChat;
pub use destination_detail::DestinationDetail;
pub use destinations::TouristDestinations;
pub use home::TouristHome;
pub use plan_trip::PlanTrip;
pub use trips::TouristTrips;
