pub mod account;
pub mod api;
pub mod catalog;
pub mod chat;
pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod listing;
pub mod model;
pub mod requests;
pub mod session;
pub mod wizard;
