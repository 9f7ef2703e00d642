use leptos::*;

use crate::{
    api::{Ad, ApiClient},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::admin::{
        components::table::{AdminTable, Cell, DeleteButton, DeleteControls, ListHeader},
        repository,
        view_model::{expire_on_load_error, use_delete_flow, use_reload, DeleteFlow},
    },
};

const HEADERS: &[&str] = &["Title", "Position", "Link", "Status", ""];

#[component]
fn AdRow(ad: Ad, flow: DeleteFlow) -> impl IntoView {
    let title = ad.title.clone();
    let active = ad.is_active;
    view! {
        <tr>
            <Cell><span class="font-medium">{ad.title}</span></Cell>
            <Cell>{ad.position.unwrap_or_else(|| "-".into())}</Cell>
            <Cell>
                {ad.link_url.map(|url| view! {
                    <a href=url.clone() target="_blank" rel="noopener noreferrer" class="hover:underline">{url}</a>
                })}
            </Cell>
            <Cell>
                <span
                    class="px-2 py-0.5 rounded text-xs font-semibold"
                    class=("bg-status-success-bg", active)
                    class=("text-status-success-text", active)
                    class=("bg-surface-muted", !active)
                    class=("text-fg-muted", !active)
                >
                    {if active { "Active" } else { "Inactive" }}
                </span>
            </Cell>
            <Cell>
                <DeleteButton flow=flow id=ad.id title=title />
            </Cell>
        </tr>
    }
}

#[component]
pub fn AdminAdsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = use_reload();

    let ads = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { repository::list_ads(&api).await }
        },
    );
    expire_on_load_error(ads);
    let flow = use_delete_flow(|api, id| async move { api.delete_ad(id).await }, reload);

    let count = Signal::derive(move || ads.get().and_then(Result::ok).map(|items| items.len()));
    let rows = move || match ads.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <EmptyState title="Could not load banner ads" description=err.error /> }.into_view(),
        Some(Ok(items)) if items.is_empty() => view! { <EmptyState title="No banner ads yet" /> }.into_view(),
        Some(Ok(items)) => view! {
            <AdminTable headers=HEADERS>
                {items
                    .into_iter()
                    .map(|ad| view! { <AdRow ad=ad flow=flow /> })
                    .collect_view()}
            </AdminTable>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-4">
            <ListHeader title="Banner Ads" count=count />
            <DeleteControls flow=flow noun="banner ad" />
            {rows}
        </div>
    }
}
