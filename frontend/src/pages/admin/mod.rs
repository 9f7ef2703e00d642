pub mod ads;
pub mod advertisements;
pub mod articles;
pub mod auctions;
pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use ads::AdminAdsPage;
pub use advertisements::AdminAdvertisementsPage;
pub use articles::AdminArticlesPage;
pub use auctions::AdminAuctionsPage;
pub use panel::AdminDashboardPage;
