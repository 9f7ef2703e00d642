use leptos::*;
use leptos_router::use_params_map;

use crate::{
    api::{ApiClient, ApiError, Article},
    components::{
        error::LoadFailure,
        layout::{Layout, LoadingSpinner},
    },
    config,
    utils::{
        format::{format_date, format_views},
        media::{resolve_image_url, ARTICLE_FALLBACK_IMAGE},
    },
};

/// Route ids are positive integers; anything else is treated as not found.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Splits article body text into paragraphs on blank lines.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
fn ArticleBody(article: Article) -> impl IntoView {
    let image = resolve_image_url(
        article.image_url.as_deref(),
        &config::cached_api_base_url(),
        ARTICLE_FALLBACK_IMAGE,
    );
    let byline = [
        article.author.clone(),
        article.published_at.as_deref().map(format_date),
        article.read_time.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let category = article.category.as_ref().map(|c| {
        let href = c
            .slug
            .as_ref()
            .map(|slug| format!("/category/{}", slug))
            .unwrap_or_else(|| "/".to_string());
        (href, c.name.clone())
    });
    let body = paragraphs(article.content.as_deref().unwrap_or_default());
    view! {
        <article class="bg-surface-elevated rounded-lg shadow overflow-hidden">
            <img src=image alt=article.title.clone() class="w-full max-h-[420px] object-cover" />
            <div class="p-6 space-y-4">
                <div class="flex items-center gap-2 text-xs">
                    {category.map(|(href, name)| view! {
                        <a href=href class="px-2 py-0.5 rounded bg-surface-muted text-fg">{name}</a>
                    })}
                    {article.is_breaking.then(|| view! {
                        <span class="px-2 py-0.5 rounded bg-status-error-bg text-status-error-text font-bold">"BREAKING"</span>
                    })}
                </div>
                <h1 class="text-3xl font-bold text-fg">{article.title}</h1>
                <p class="text-sm text-fg-muted">{byline}" · "{format_views(article.views)}" views"</p>
                {article.excerpt.map(|text| view! { <p class="text-lg text-fg">{text}</p> })}
                <div class="space-y-3 text-fg leading-relaxed">
                    {body.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </div>
        </article>
    }
}

fn article_view(result: Result<Article, ApiError>) -> View {
    match result {
        Ok(article) => view! { <ArticleBody article=article /> }.into_view(),
        Err(err) => view! { <LoadFailure error=err not_found="Article not found" /> }.into_view(),
    }
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let params = use_params_map();
    let article_id = create_memo(move |_| params.with(|p| parse_id(p.get("id").map(String::as_str))));

    let api_view = api.clone();
    create_effect(move |_| {
        let Some(id) = article_id.get() else {
            return;
        };
        let api = api_view.clone();
        spawn_local(async move {
            if let Err(err) = api.record_article_view(id).await {
                log::debug!("View count for article {} not recorded: {}", id, err);
            }
        });
    });

    let article = create_local_resource(
        move || article_id.get(),
        move |id| {
            let api = api.clone();
            async move {
                match id {
                    Some(id) => api.get_article(id).await,
                    None => Err(ApiError::not_found("Article not found")),
                }
            }
        },
    );

    let content = move || match article.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(result) => article_view(result),
    };

    view! {
        <Layout>
            <div class="px-4 max-w-4xl mx-auto">{content}</div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage::MemoryStorage;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn article_body_renders_byline_and_paragraphs() {
        let html = render_to_string(|| {
            let article: Article = serde_json::from_value(json!({
                "id": 5,
                "title": "Parliament passes budget",
                "content": "The vote was close.\n\nDebate lasted two days.",
                "author": "Jane Mukamana",
                "category": {"name": "Politics", "slug": "politics"},
                "publishedAt": "2025-06-01T10:00:00Z",
                "views": 120
            }))
            .unwrap();
            view! { <ArticleBody article=article /> }
        });
        assert!(html.contains("Parliament passes budget"));
        assert!(html.contains("Jane Mukamana"));
        assert!(html.contains("June 1, 2025"));
        assert!(html.contains("/category/politics"));
        assert!(html.contains("Debate lasted two days."));
        assert!(!html.contains("BREAKING"));
    }

    #[test]
    fn missing_article_shows_not_found() {
        let html = render_to_string(|| article_view(Err(ApiError::not_found("No such article"))));
        assert!(html.contains("Article not found"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_not_reported_as_missing_article() {
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_storage(Rc::new(MemoryStorage::new()));
        let result = api.get_article(1).await;
        assert!(matches!(&result, Err(err) if !err.is_not_found()));
        let html = render_to_string(move || article_view(result));
        assert!(html.contains("Could not load this page"));
        assert!(!html.contains("Article not found"));
    }
}
