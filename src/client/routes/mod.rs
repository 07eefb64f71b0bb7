pub mod admin;
pub mod guide;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod tourist;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
