pub mod chat_panel;
pub mod destination_card;
pub mod entity_table;
pub mod guard;
pub mod navbar;
pub mod page;
pub mod star_rating;
pub mod toast;
pub mod trip_card;
pub mod wizard;

pub use chat_panel::ChatPanel;
pub use destination_card::DestinationCard;
pub use entity_table::EntityTable;
pub use guard::RouteGuard;
pub use navbar::Navbar;
pub use page::Page;
pub use star_rating::StarRatingDisplay;
pub use toast::Toasts;
pub use trip_card::TripCard;
