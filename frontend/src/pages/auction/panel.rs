use leptos::{ev::SubmitEvent, *};
use leptos_router::use_params_map;
use web_sys::HtmlInputElement;

use crate::{
    api::{ApiClient, ApiError, Auction, Bid},
    components::{
        error::{InlineErrorMessage, LoadFailure},
        guard::ADMIN_LOGIN_PATH,
        layout::{Layout, LoadingSpinner, SuccessMessage},
    },
    config,
    pages::{article::parse_id, auction::utils},
    state::auth::use_session_expiry,
    utils::{
        format::{display_bid, format_amount, format_date},
        media::first_image,
    },
};

fn redirect_to_login() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(ADMIN_LOGIN_PATH);
    }
}

#[component]
fn BidHistory(bids: Vec<Bid>) -> impl IntoView {
    if bids.is_empty() {
        return view! { <p class="text-sm text-fg-muted">"No bids yet. Be the first!"</p> }.into_view();
    }
    view! {
        <ul class="divide-y divide-border">
            {bids
                .into_iter()
                .map(|bid| {
                    let amount = bid.amount.map(format_amount).unwrap_or_else(|| "-".into());
                    let when = bid.created_at.as_deref().map(format_date);
                    view! {
                        <li class="flex justify-between py-2 text-sm">
                            <div>
                                <p class="font-medium text-fg">{bid.bidder_name.unwrap_or_else(|| "Anonymous".into())}</p>
                                <p class="text-xs text-fg-muted">{when}</p>
                            </div>
                            <span class="font-semibold text-fg">{amount}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}

#[component]
fn AuctionSummary(auction: Auction) -> impl IntoView {
    let image = first_image(&auction.images, &config::cached_api_base_url());
    let current = display_bid(auction.current_bid, auction.starting_bid);
    let starting = auction.starting_bid.map(format_amount);
    let ends = auction.end_time.as_deref().map(|raw| format!("Ends {}", format_date(raw)));
    let status = auction.status_label().to_uppercase();
    view! {
        <div class="bg-surface-elevated rounded-lg shadow overflow-hidden">
            <img src=image alt=auction.title.clone() class="w-full max-h-[380px] object-cover" />
            <div class="p-6 space-y-2">
                <span class="inline-block px-2 py-0.5 rounded bg-status-warning-bg text-status-warning-text text-xs font-bold">
                    {status}
                </span>
                <h1 class="text-2xl font-bold text-fg">{auction.title}</h1>
                {auction.location.map(|place| view! { <p class="text-sm text-fg-muted">{place}</p> })}
                <p class="text-lg text-fg">"Current bid: "<span class="font-semibold">{current}</span></p>
                {starting.map(|text| view! { <p class="text-xs text-fg-muted">"Starting bid: "{text}</p> })}
                {ends.map(|text| view! { <p class="text-xs text-fg-muted">{text}</p> })}
                {auction.description.map(|text| view! { <p class="text-sm text-fg leading-relaxed">{text}</p> })}
            </div>
        </div>
    }
}

#[component]
pub fn AuctionPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let params = use_params_map();
    let auction_id = create_memo(move |_| params.with(|p| parse_id(p.get("id").map(String::as_str))));
    let expire = use_session_expiry();

    let api_auction = api.clone();
    let auction = create_local_resource(
        move || auction_id.get(),
        move |id| {
            let api = api_auction.clone();
            async move {
                match id {
                    Some(id) => api.get_auction(id).await,
                    None => Err(ApiError::not_found("Auction not found")),
                }
            }
        },
    );
    let api_bids = api.clone();
    let bids = create_local_resource(
        move || auction_id.get(),
        move |id| {
            let api = api_bids.clone();
            async move {
                match id {
                    Some(id) => api.auction_bids(id).await.unwrap_or_else(|err| {
                        log::error!("Bid history for auction {} failed: {}", id, err);
                        Vec::new()
                    }),
                    None => Vec::new(),
                }
            }
        },
    );

    let (amount, set_amount) = create_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let (placed, set_placed) = create_signal(None::<f64>);

    let api_bid = api.clone();
    let bid_action = create_action(move |(id, value): &(i64, f64)| {
        let api = api_bid.clone();
        let (id, value) = (*id, *value);
        async move { api.place_bid(id, value).await.map(|_| value) }
    });
    let pending = bid_action.pending();

    create_effect(move |_| {
        let Some(result) = bid_action.value().get() else {
            return;
        };
        match result {
            Ok(value) => {
                error.set(None);
                set_amount.set(String::new());
                set_placed.set(Some(value));
                auction.refetch();
                bids.refetch();
            }
            Err(err) => {
                if expire.call(err.clone()) {
                    redirect_to_login();
                    return;
                }
                error.set(Some(err));
            }
        }
    });

    let api_submit = api.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if !api_submit.has_credential() {
            redirect_to_login();
            return;
        }
        let Some(current) = untrack(move || auction.get()).and_then(Result::ok) else {
            return;
        };
        set_placed.set(None);
        match utils::validate_bid(&amount.get_untracked(), &current) {
            Ok(value) => {
                error.set(None);
                bid_action.dispatch((current.id, value));
            }
            Err(message) => error.set(Some(ApiError::validation(message))),
        }
    };

    let bid_form = move |lot: &Auction| {
        if !utils::is_open(lot) {
            return view! { <p class="text-sm text-fg-muted">"Bidding is closed for this auction."</p> }.into_view();
        }
        let minimum = format_amount(lot.minimum_bid());
        view! {
            <form class="space-y-3" on:submit=on_submit.clone()>
                <label class="block text-sm text-fg-muted" for="bid-amount">"Minimum bid: "{minimum}</label>
                <input
                    id="bid-amount"
                    type="text"
                    inputmode="decimal"
                    placeholder="Enter your bid"
                    class="w-full rounded-md border border-border bg-surface px-3 py-2 text-fg"
                    prop:value=amount
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        set_amount.set(target.value());
                    }
                />
                <InlineErrorMessage error=error />
                <button
                    type="submit"
                    class="w-full rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 font-semibold disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Placing bid..." } else { "Place Bid" }}
                </button>
                {move || placed.get().map(|value| view! {
                    <SuccessMessage message=format!("Bid of {} placed", format_amount(value)) />
                })}
            </form>
        }
        .into_view()
    };

    let content = move || match auction.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <LoadFailure error=err not_found="Auction not found" /> }.into_view(),
        Some(Ok(lot)) => {
            let form = bid_form(&lot);
            view! {
                <div class="grid gap-8 lg:grid-cols-3">
                    <div class="lg:col-span-2 space-y-6">
                        <AuctionSummary auction=lot />
                        <section class="bg-surface-elevated rounded-lg shadow p-6">
                            <h2 class="text-xl font-bold text-fg mb-3">"Bid History"</h2>
                            {move || match bids.get() {
                                None => view! { <LoadingSpinner /> }.into_view(),
                                Some(items) => view! { <BidHistory bids=items /> }.into_view(),
                            }}
                        </section>
                    </div>
                    <aside class="bg-surface-elevated rounded-lg shadow p-6 h-fit">{form}</aside>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <Layout>
            <div class="px-4">{content}</div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage::MemoryStorage;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    fn failure_html(err: ApiError) -> String {
        render_to_string(move || view! { <LoadFailure error=err not_found="Auction not found" /> })
    }

    #[tokio::test]
    async fn server_failure_is_not_reported_as_missing_auction() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/auctions/404");
            then.status(404).json_body(json!({"error": "Auction not found"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/auctions/500");
            then.status(500).json_body(json!({"error": "Database unavailable"}));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStorage::new()));

        let missing = api.get_auction(404).await.unwrap_err();
        let html = failure_html(missing);
        assert!(html.contains("Auction not found"));

        let broken = api.get_auction(500).await.unwrap_err();
        let html = failure_html(broken);
        assert!(html.contains("Database unavailable"));
        assert!(!html.contains("Auction not found"));
    }

    #[test]
    fn bid_history_lists_bidders() {
        let html = render_to_string(|| {
            let bids: Vec<Bid> = serde_json::from_value(json!([
                {"id": 1, "amount": 250000, "bidderName": "User***23", "createdAt": "2025-05-01"},
                {"id": 2, "amount": "240000", "bidder": "Buyer***45"}
            ]))
            .unwrap();
            view! { <BidHistory bids=bids /> }
        });
        assert!(html.contains("User***23"));
        assert!(html.contains("250,000 RWF"));
        assert!(html.contains("Buyer***45"));
    }

    #[test]
    fn empty_bid_history_invites_first_bid() {
        let html = render_to_string(|| view! { <BidHistory bids=Vec::new() /> });
        assert!(html.contains("No bids yet"));
    }

    #[test]
    fn summary_shows_status_and_starting_bid() {
        let html = render_to_string(|| {
            let auction: Auction = serde_json::from_value(json!({
                "id": 4, "title": "Canon EOS", "startingBid": 150000, "status": "ended",
                "location": "Kigali"
            }))
            .unwrap();
            view! { <AuctionSummary auction=auction /> }
        });
        assert!(html.contains("ENDED"));
        assert!(html.contains("Canon EOS"));
        assert!(html.contains("150,000 RWF"));
        assert!(html.contains("Kigali"));
    }
}
