use leptos::*;

use crate::{
    api::{Advertisement, ApiClient},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::admin::{
        components::table::{AdminTable, Cell, DeleteButton, DeleteControls, ListHeader},
        repository,
        view_model::{expire_on_load_error, use_delete_flow, use_reload, DeleteFlow},
    },
    utils::format::{format_date, format_views},
};

const HEADERS: &[&str] = &["Title", "Company", "Category", "Deadline", "Views", ""];

#[component]
fn AdvertisementRow(advertisement: Advertisement, flow: DeleteFlow) -> impl IntoView {
    let deadline = advertisement.deadline.as_deref().map(format_date).unwrap_or_default();
    let title = advertisement.title.clone();
    view! {
        <tr>
            <Cell>
                <span class="font-medium">{advertisement.title}</span>
                {advertisement.is_featured.then(|| view! {
                    <span class="ml-2 px-2 py-0.5 rounded bg-status-warning-bg text-status-warning-text text-xs">"Featured"</span>
                })}
            </Cell>
            <Cell>{advertisement.company.unwrap_or_default()}</Cell>
            <Cell>{advertisement.category.unwrap_or_default()}</Cell>
            <Cell>{deadline}</Cell>
            <Cell>{format_views(advertisement.views)}</Cell>
            <Cell>
                <DeleteButton flow=flow id=advertisement.id title=title />
            </Cell>
        </tr>
    }
}

#[component]
pub fn AdminAdvertisementsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = use_reload();

    let advertisements = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { repository::list_advertisements(&api).await }
        },
    );
    expire_on_load_error(advertisements);
    let flow = use_delete_flow(
        |api, id| async move { api.delete_advertisement(id).await },
        reload,
    );

    let count = Signal::derive(move || advertisements.get().and_then(Result::ok).map(|items| items.len()));
    let rows = move || match advertisements.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <EmptyState title="Could not load advertisements" description=err.error /> }.into_view(),
        Some(Ok(items)) if items.is_empty() => view! { <EmptyState title="No advertisements yet" /> }.into_view(),
        Some(Ok(items)) => view! {
            <AdminTable headers=HEADERS>
                {items
                    .into_iter()
                    .map(|advertisement| view! { <AdvertisementRow advertisement=advertisement flow=flow /> })
                    .collect_view()}
            </AdminTable>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-4">
            <ListHeader title="Advertisements" count=count />
            <DeleteControls flow=flow noun="advertisement" />
            {rows}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{admin_account, provide_offline_api, provide_session};
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn row_shows_company_and_deadline() {
        let html = render_to_string(|| {
            provide_offline_api();
            provide_session(SessionPhase::AuthenticatedAdmin, Some(admin_account()));
            let flow = use_delete_flow(
                |api, id| async move { api.delete_advertisement(id).await },
                use_reload(),
            );
            let advertisement: Advertisement = serde_json::from_value(json!({
                "id": 3, "title": "Accountant", "company": "Bank of Kigali",
                "deadline": "2025-07-15", "isFeatured": true
            }))
            .unwrap();
            view! { <table><tbody><AdvertisementRow advertisement=advertisement flow=flow /></tbody></table> }
        });
        assert!(html.contains("Accountant"));
        assert!(html.contains("Bank of Kigali"));
        assert!(html.contains("July 15, 2025"));
        assert!(html.contains("Featured"));
    }
}
