mod auth;
mod credentials;
mod errors;
mod trip;
mod wishlist;
