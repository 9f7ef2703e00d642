pub mod auth;
pub mod rotation;
pub mod session;
