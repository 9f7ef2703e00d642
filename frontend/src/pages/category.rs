use leptos::*;
use leptos_router::use_params_map;

use crate::{
    api::{ApiClient, ArticleQuery, Category},
    components::{
        cards::ArticleCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};

const CATEGORY_PAGE_LIMIT: u32 = 30;

/// Heading for a category page: the backend's name when known, otherwise the
/// slug with its first letter capitalised.
pub fn category_title(slug: &str, category: Option<&Category>) -> String {
    if let Some(category) = category.filter(|c| !c.name.trim().is_empty()) {
        return category.name.clone();
    }
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let params = use_params_map();
    let slug = create_memo(move |_| params.with(|p| p.get("slug").cloned().unwrap_or_default()));

    let api_category = api.clone();
    let category = create_local_resource(
        move || slug.get(),
        move |slug| {
            let api = api_category.clone();
            async move {
                match api.get_category(&slug).await {
                    Ok(category) => Some(category),
                    Err(err) => {
                        log::warn!("Category {} not resolved: {}", slug, err);
                        None
                    }
                }
            }
        },
    );
    let articles = create_local_resource(
        move || slug.get(),
        move |slug| {
            let api = api.clone();
            async move {
                let query = ArticleQuery {
                    category: Some(slug),
                    limit: Some(CATEGORY_PAGE_LIMIT),
                    ..Default::default()
                };
                api.list_articles(&query).await
            }
        },
    );

    let title = move || {
        let slug = slug.get();
        let category = category.get().flatten();
        category_title(&slug, category.as_ref())
    };
    let description = move || category.get().flatten().and_then(|c| c.description);

    let listing = move || match articles.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
        Some(Ok(items)) if items.is_empty() => view! {
            <EmptyState
                title="No articles in this category yet"
                action_href="/"
                action_label="Back to home"
            />
        }
        .into_view(),
        Some(Ok(items)) => view! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {items
                    .into_iter()
                    .map(|article| view! { <ArticleCard article=article /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="px-4 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{title}</h1>
                    {move || description().map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                </div>
                {listing}
            </div>
        </Layout>
    }
}
