use leptos::*;
use web_sys::HtmlSelectElement;

use crate::{
    api::{Advertisement, AdvertisementQuery, ApiClient},
    components::{
        cards::AdvertisementCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};

const ALL_CATEGORIES: &str = "all";
const LISTING_LIMIT: u32 = 100;

/// Distinct non-empty categories in first-seen order.
pub fn distinct_categories(items: &[Advertisement]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in items.iter().filter_map(|ad| ad.category.as_deref()) {
        let category = category.trim();
        if !category.is_empty() && !seen.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            seen.push(category.to_string());
        }
    }
    seen
}

pub fn filter_by_category(items: &[Advertisement], selected: &str) -> Vec<Advertisement> {
    if selected == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|ad| {
            ad.category
                .as_deref()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case(selected))
        })
        .cloned()
        .collect()
}

#[component]
pub fn AdvertisementsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (selected, set_selected) = create_signal(ALL_CATEGORIES.to_string());

    let advertisements = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                let query = AdvertisementQuery {
                    limit: Some(LISTING_LIMIT),
                    ..Default::default()
                };
                api.list_advertisements(&query).await
            }
        },
    );

    let options = move || {
        advertisements
            .get()
            .and_then(Result::ok)
            .map(|items| distinct_categories(&items))
            .unwrap_or_default()
            .into_iter()
            .map(|category| {
                let value = category.clone();
                view! { <option value=value>{category}</option> }
            })
            .collect_view()
    };

    let listing = move || match advertisements.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
        Some(Ok(items)) => {
            let visible = filter_by_category(&items, &selected.get());
            if visible.is_empty() {
                view! {
                    <EmptyState
                        title="No advertisements found"
                        description="Try another category."
                    />
                }
                .into_view()
            } else {
                view! {
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {visible
                            .into_iter()
                            .map(|ad| view! { <AdvertisementCard advertisement=ad /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }
        }
    };

    view! {
        <Layout>
            <div class="px-4 space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <h1 class="text-2xl font-bold text-fg">"Advertisements"</h1>
                    <label class="text-sm text-fg-muted flex items-center gap-2">
                        "Category"
                        <select
                            class="rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm text-fg"
                            on:change=move |ev| {
                                let target = event_target::<HtmlSelectElement>(&ev);
                                set_selected.set(target.value());
                            }
                        >
                            <option value=ALL_CATEGORIES>"All categories"</option>
                            {options}
                        </select>
                    </label>
                </div>
                {listing}
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listings() -> Vec<Advertisement> {
        serde_json::from_value(json!([
            {"id": 1, "title": "Driver", "category": "Transport"},
            {"id": 2, "title": "Nurse", "category": "Health"},
            {"id": 3, "title": "Mechanic", "category": "transport "},
            {"id": 4, "title": "Intern"}
        ]))
        .unwrap()
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(distinct_categories(&listings()), vec!["Transport", "Health"]);
    }

    #[test]
    fn filter_matches_case_insensitively() {
        let items = listings();
        let transport = filter_by_category(&items, "Transport");
        let ids: Vec<i64> = transport.iter().map(|ad| ad.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_by_category(&items, ALL_CATEGORIES).len(), 4);
        assert!(filter_by_category(&items, "Finance").is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{provide_offline_api, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_filter_and_loading_state() {
        let html = render_to_string(|| {
            provide_offline_api();
            provide_session(SessionPhase::Unauthenticated, None);
            view! { <AdvertisementsPage /> }
        });
        assert!(html.contains("All categories"));
        assert!(html.contains("animate-spin"));
    }
}
