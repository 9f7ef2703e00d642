use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAdmin, layout::AdminLayout},
    pages::{
        admin::{
            AdminAdsPage, AdminAdvertisementsPage, AdminArticlesPage, AdminAuctionsPage,
            AdminDashboardPage,
        },
        admin_login::AdminLoginPage,
        advertisement::AdvertisementDetailPage,
        advertisements::AdvertisementsPage,
        article::ArticlePage,
        auction::AuctionPage,
        auctions::AuctionsPage,
        category::CategoryPage,
        home::HomePage,
        not_found::NotFoundPage,
        search::SearchPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/category/:slug",
    "/article/:id",
    "/search",
    "/advertisements",
    "/advertisement/:id",
    "/auctions",
    "/auction/:id",
    "/admin/login",
    "/admin",
    "/admin/articles",
    "/admin/advertisements",
    "/admin/auctions",
    "/admin/ads",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/articles",
    "/admin/advertisements",
    "/admin/auctions",
    "/admin/ads",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/category/:slug",
    "/article/:id",
    "/search",
    "/advertisements",
    "/advertisement/:id",
    "/auctions",
    "/auction/:id",
    "/admin/login",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/category/:slug" view=CategoryPage/>
                    <Route path="/article/:id" view=ArticlePage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/advertisements" view=AdvertisementsPage/>
                    <Route path="/advertisement/:id" view=AdvertisementDetailPage/>
                    <Route path="/auctions" view=AuctionsPage/>
                    <Route path="/auction/:id" view=AuctionPage/>
                    <Route path="/admin/login" view=AdminLoginPage/>
                    <Route path="/admin" view=ProtectedDashboard/>
                    <Route path="/admin/articles" view=ProtectedArticles/>
                    <Route path="/admin/advertisements" view=ProtectedAdvertisements/>
                    <Route path="/admin/auctions" view=ProtectedAuctions/>
                    <Route path="/admin/ads" view=ProtectedAds/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminDashboardPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedArticles() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminArticlesPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedAdvertisements() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminAdvertisementsPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedAuctions() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminAuctionsPage/></AdminLayout></RequireAdmin> }
}

#[component]
fn ProtectedAds() -> impl IntoView {
    view! { <RequireAdmin><AdminLayout><AdminAdsPage/></AdminLayout></RequireAdmin> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_admin_route_except_login_is_protected() {
        for path in ROUTE_PATHS.iter().filter(|p| p.starts_with("/admin")) {
            let protected = PROTECTED_ROUTE_PATHS.contains(path);
            assert_eq!(protected, *path != "/admin/login", "{}", path);
        }
    }

    #[test]
    fn public_and_protected_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        let union: HashSet<&str> = protected.union(&public).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
