pub mod notice;
pub mod session;
