mod advertisements;
mod articles;
mod auctions;
mod auth;
mod categories;
pub mod client;
pub mod types;
mod wire;

pub use client::*;
pub use types::*;
