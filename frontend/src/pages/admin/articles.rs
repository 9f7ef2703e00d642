use leptos::*;

use crate::{
    api::{ApiClient, ApiError, Article},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::admin::{
        components::table::{AdminTable, Cell, DeleteButton, DeleteControls, ListHeader},
        repository,
        view_model::{
            bump, expire_on_load_error, report_error, use_delete_flow, use_reload, DeleteFlow,
        },
    },
    state::auth::use_session_expiry,
    utils::format::{format_date, format_views},
};

const HEADERS: &[&str] = &["Title", "Category", "Published", "Views", "Breaking", ""];

#[component]
fn ArticleRow(article: Article, flow: DeleteFlow, toggle: Action<(i64, bool), Result<(), ApiError>>) -> impl IntoView {
    let id = article.id;
    let next = !article.is_breaking;
    let published = article.published_at.as_deref().map(format_date).unwrap_or_default();
    let category = article.category.map(|c| c.name).unwrap_or_default();
    let title = article.title.clone();
    let pending = toggle.pending();
    view! {
        <tr>
            <Cell>
                <a href=format!("/article/{}", id) class="font-medium hover:underline">{article.title}</a>
            </Cell>
            <Cell>{category}</Cell>
            <Cell>{published}</Cell>
            <Cell>{format_views(article.views)}</Cell>
            <Cell>
                <button
                    type="button"
                    class="px-2 py-0.5 rounded text-xs font-bold disabled:opacity-50"
                    class=("bg-status-error-bg", !next)
                    class=("text-status-error-text", !next)
                    class=("bg-surface-muted", next)
                    class=("text-fg-muted", next)
                    aria-pressed=(!next).to_string()
                    disabled=move || pending.get()
                    on:click=move |_| toggle.dispatch((id, next))
                >
                    {if next { "Mark breaking" } else { "BREAKING" }}
                </button>
            </Cell>
            <Cell>
                <DeleteButton flow=flow id=id title=title />
            </Cell>
        </tr>
    }
}

#[component]
pub fn AdminArticlesPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = use_reload();
    let expire = use_session_expiry();

    let api_list = api.clone();
    let articles = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api_list.clone();
            async move { repository::list_articles(&api).await }
        },
    );
    expire_on_load_error(articles);

    let flow = use_delete_flow(
        |api, id| async move { api.delete_article(id).await },
        reload,
    );

    let toggle = create_action(move |(id, is_breaking): &(i64, bool)| {
        let api = api.clone();
        let (id, is_breaking) = (*id, *is_breaking);
        async move { api.set_article_breaking(id, is_breaking).await }
    });
    create_effect(move |_| match toggle.value().get() {
        Some(Ok(())) => bump(reload),
        Some(Err(err)) => report_error(err, expire, flow.error),
        None => {}
    });

    let count = Signal::derive(move || articles.get().and_then(Result::ok).map(|items| items.len()));
    let rows = move || match articles.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <EmptyState title="Could not load articles" description=err.error /> }.into_view(),
        Some(Ok(items)) if items.is_empty() => view! { <EmptyState title="No articles yet" /> }.into_view(),
        Some(Ok(items)) => view! {
            <AdminTable headers=HEADERS>
                {items
                    .into_iter()
                    .map(|article| view! { <ArticleRow article=article flow=flow toggle=toggle /> })
                    .collect_view()}
            </AdminTable>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-4">
            <ListHeader title="Articles" count=count />
            <DeleteControls flow=flow noun="article" />
            {rows}
        </div>
    }
}
