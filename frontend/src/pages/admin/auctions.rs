use leptos::*;

use crate::{
    api::{ApiClient, Auction},
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::admin::{
        components::table::{AdminTable, Cell, DeleteButton, DeleteControls, ListHeader},
        repository,
        view_model::{expire_on_load_error, use_delete_flow, use_reload, DeleteFlow},
    },
    utils::format::{display_bid, format_date},
};

const HEADERS: &[&str] = &["Title", "Current bid", "Status", "Ends", ""];

#[component]
fn AuctionRow(auction: Auction, flow: DeleteFlow) -> impl IntoView {
    let bid = display_bid(auction.current_bid, auction.starting_bid);
    let status = auction.status_label().to_string();
    let ends = auction.end_time.as_deref().map(format_date).unwrap_or_default();
    let title = auction.title.clone();
    view! {
        <tr>
            <Cell>
                <a href=format!("/auction/{}", auction.id) class="font-medium hover:underline">{auction.title}</a>
            </Cell>
            <Cell>{bid}</Cell>
            <Cell><span class="uppercase text-xs font-semibold">{status}</span></Cell>
            <Cell>{ends}</Cell>
            <Cell>
                <DeleteButton flow=flow id=auction.id title=title />
            </Cell>
        </tr>
    }
}

#[component]
pub fn AdminAuctionsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let reload = use_reload();

    let auctions = create_local_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { repository::list_auctions(&api).await }
        },
    );
    expire_on_load_error(auctions);
    let flow = use_delete_flow(|api, id| async move { api.delete_auction(id).await }, reload);

    let count = Signal::derive(move || auctions.get().and_then(Result::ok).map(|items| items.len()));
    let rows = move || match auctions.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <EmptyState title="Could not load auctions" description=err.error /> }.into_view(),
        Some(Ok(items)) if items.is_empty() => view! { <EmptyState title="No auctions yet" /> }.into_view(),
        Some(Ok(items)) => view! {
            <AdminTable headers=HEADERS>
                {items
                    .into_iter()
                    .map(|auction| view! { <AuctionRow auction=auction flow=flow /> })
                    .collect_view()}
            </AdminTable>
        }
        .into_view(),
    };

    view! {
        <div class="space-y-4">
            <ListHeader title="Auctions" count=count />
            <DeleteControls flow=flow noun="auction" />
            {rows}
        </div>
    }
}
