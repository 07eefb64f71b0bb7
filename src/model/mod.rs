pub mod api;
pub mod chat;
pub mod destination;
pub mod guide;
pub mod notice;
pub mod tourist;
pub mod trip;
pub mod user;
pub mod wishlist;
