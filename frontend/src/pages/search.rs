use leptos::*;
use leptos_router::use_query_map;

use crate::{
    api::{ApiClient, ApiError, Article},
    components::{
        cards::ArticleCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};

const SEARCH_LIMIT: u32 = 30;

fn results_view(query: &str, result: Result<Vec<Article>, ApiError>) -> View {
    if query.is_empty() {
        return view! { <EmptyState title="Type something to search the news" /> }.into_view();
    }
    match result {
        Err(err) => {
            log::error!("Search for {:?} failed: {}", query, err);
            view! { <ErrorMessage message=err.to_string() /> }.into_view()
        }
        Ok(items) if items.is_empty() => view! {
            <EmptyState
                title=format!("No articles match \"{}\"", query)
                action_href="/"
                action_label="Back to home"
            />
        }
        .into_view(),
        Ok(items) => view! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {items
                    .into_iter()
                    .map(|article| view! { <ArticleCard article=article /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let params = use_query_map();
    let query = create_memo(move |_| {
        params.with(|p| p.get("q").map(|q| q.trim().to_string()).unwrap_or_default())
    });

    let results = create_local_resource(
        move || query.get(),
        move |query| {
            let api = api.clone();
            async move { api.search_articles(&query, SEARCH_LIMIT).await }
        },
    );

    let heading = move || {
        let query = query.get();
        if query.is_empty() {
            "Search".to_string()
        } else {
            format!("Results for \"{}\"", query)
        }
    };
    let listing = move || match results.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(result) => results_view(&query.get(), result),
    };

    view! {
        <Layout>
            <div class="px-4 space-y-6">
                <h1 class="text-2xl font-bold text-fg">{heading}</h1>
                {listing}
            </div>
        </Layout>
    }
}
