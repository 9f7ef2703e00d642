pub mod admin;
pub mod admin_login;
pub mod advertisement;
pub mod advertisements;
pub mod article;
pub mod auction;
pub mod auctions;
pub mod category;
pub mod home;
pub mod not_found;
pub mod search;
