use leptos::*;

use crate::{
    api::ApiClient,
    components::{cards::StatCard, guard::ADMIN_LOGIN_PATH, layout::ErrorMessage},
    pages::admin::{
        repository::{self, DashboardStats},
        view_model::expire_on_load_error,
    },
    state::auth::{use_auth, use_logout},
};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (session, _) = use_auth();
    let logout = use_logout();

    let stats = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_stats(&api).await }
        },
    );
    expire_on_load_error(stats);

    let stat = move |pick: fn(&DashboardStats) -> Option<usize>| {
        Signal::derive(move || stats.get().and_then(Result::ok).and_then(|s| pick(&s)))
    };
    let greeting = move || {
        session
            .get()
            .account
            .map(|account| format!("Welcome back, {}", account.label()))
            .unwrap_or_else(|| "Welcome back".into())
    };
    let failure = move || {
        stats
            .get()
            .and_then(Result::err)
            .filter(|err| !err.is_unauthorized())
            .map(|err| view! { <ErrorMessage message=err.error /> })
    };
    let on_logout = move |_| {
        logout.call(());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(ADMIN_LOGIN_PATH);
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Dashboard"</h1>
                    <p class="text-sm text-fg-muted">{greeting}</p>
                </div>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
            {failure}
            <dl class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-5">
                <StatCard label="Articles" value=stat(|s| s.articles) href="/admin/articles" />
                <StatCard label="Breaking news" value=stat(|s| s.breaking) href="/admin/articles" />
                <StatCard label="Active banner ads" value=stat(|s| s.active_ads) href="/admin/ads" />
                <StatCard label="Advertisements" value=stat(|s| s.advertisements) href="/admin/advertisements" />
                <StatCard label="Auctions" value=stat(|s| s.auctions) href="/admin/auctions" />
            </dl>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{admin_account, provide_offline_api, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_greets_admin_and_shows_counters() {
        let html = render_to_string(|| {
            provide_offline_api();
            provide_session(SessionPhase::AuthenticatedAdmin, Some(admin_account()));
            view! { <AdminDashboardPage /> }
        });
        assert!(html.contains("Welcome back, Portal Admin"));
        assert!(html.contains("Breaking news"));
        assert!(html.contains("Active banner ads"));
        assert!(html.contains("/admin/auctions"));
        assert!(html.contains("Logout"));
    }
}
