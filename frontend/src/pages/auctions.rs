use leptos::*;

use crate::{
    api::{ApiClient, AuctionQuery},
    components::{
        cards::AuctionCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};

const LISTING_LIMIT: u32 = 50;

/// Status tabs: backend status value (empty for every status) and label.
pub const STATUS_FILTERS: &[(&str, &str)] = &[("active", "Active"), ("ended", "Ended"), ("", "All")];

pub fn listing_query(status: &str) -> AuctionQuery {
    AuctionQuery {
        status: Some(status.trim().to_string()).filter(|s| !s.is_empty()),
        category: None,
        limit: Some(LISTING_LIMIT),
    }
}

#[component]
pub fn AuctionsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (status, set_status) = create_signal(STATUS_FILTERS[0].0.to_string());

    let auctions = create_local_resource(
        move || status.get(),
        move |status| {
            let api = api.clone();
            async move { api.list_auctions(&listing_query(&status)).await }
        },
    );

    let tabs = STATUS_FILTERS
        .iter()
        .map(|(value, label)| {
            let value = *value;
            let is_selected = move || status.get() == value;
            view! {
                <button
                    type="button"
                    class="px-3 py-1 rounded-full text-sm font-medium"
                    class=("bg-action-primary-bg", is_selected)
                    class=("text-action-primary-text", is_selected)
                    class=("bg-surface-muted", move || !is_selected())
                    class=("text-fg", move || !is_selected())
                    aria-pressed=move || is_selected().to_string()
                    on:click=move |_| set_status.set(value.to_string())
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    let listing = move || match auctions.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => {
            log::error!("Auction listing failed: {}", err);
            view! { <ErrorMessage message=err.to_string() /> }.into_view()
        }
        Some(Ok(items)) if items.is_empty() => view! {
            <EmptyState
                title="No auctions here"
                description="Try another status or check back later."
            />
        }
        .into_view(),
        Some(Ok(items)) => view! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {items
                    .into_iter()
                    .map(|auction| view! { <AuctionCard auction=auction /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="px-4 space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <h1 class="text-2xl font-bold text-fg">"Auctions"</h1>
                    <div class="flex gap-2" role="group" aria-label="Auction status">{tabs}</div>
                </div>
                {listing}
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{provide_offline_api, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_status_tabs_and_loading_state() {
        let html = render_to_string(|| {
            provide_offline_api();
            provide_session(SessionPhase::Unauthenticated, None);
            view! { <AuctionsPage /> }
        });
        assert!(html.contains("Auctions"));
        assert!(html.contains("Active"));
        assert!(html.contains("Ended"));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("animate-spin"));
    }
}
