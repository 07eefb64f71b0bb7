pub mod factory;
pub mod token;
