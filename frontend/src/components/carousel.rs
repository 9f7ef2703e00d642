use leptos::*;

use crate::{
    api::{Advertisement, Article, Auction},
    components::{
        empty_state::EmptyState,
        rotator::{use_rotating_selector, RotatingSelector},
    },
    config,
    utils::{
        format::{display_bid, truncate},
        media::{first_image, resolve_image_url, ARTICLE_FALLBACK_IMAGE},
    },
};

pub const BREAKING_INTERVAL_MS: u32 = 4000;
pub const ADVERTISEMENT_INTERVAL_MS: u32 = 5000;
pub const AUCTION_INTERVAL_MS: u32 = 4000;

/// Previous / next buttons and one dot per item. Follows the selector's
/// collection, so dots appear or vanish after `update_items`.
#[component]
pub fn CarouselControls<T: Clone + 'static>(
    selector: RotatingSelector<T>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let label = store_value(label);
    move || {
        let count = selector.len();
        if count < 2 {
            return ().into_view();
        }
        let label = label.get_value();
        let prev_label = format!("Previous {}", label);
        let next_label = format!("Next {}", label);
        let dots = (0..count)
            .map(|index| {
                let dot_label = format!("Go to {} {}", label, index + 1);
                let is_current = move || selector.current_index() == Some(index);
                view! {
                    <button
                        type="button"
                        class="h-2 rounded-full transition-all"
                        class=("w-8", is_current)
                        class=("bg-white", is_current)
                        class=("w-2", move || !is_current())
                        class=("bg-white/50", move || !is_current())
                        aria-label=dot_label
                        aria-current=move || is_current().to_string()
                        on:click=move |_| selector.jump_to(index)
                    ></button>
                }
            })
            .collect_view();
        view! {
            <button
                type="button"
                class="absolute left-3 top-1/2 -translate-y-1/2 w-9 h-9 rounded-full bg-white/20 text-white"
                aria-label=prev_label
                on:click=move |_| selector.retreat()
            >
                "‹"
            </button>
            <button
                type="button"
                class="absolute right-3 top-1/2 -translate-y-1/2 w-9 h-9 rounded-full bg-white/20 text-white"
                aria-label=next_label
                on:click=move |_| selector.advance()
            >
                "›"
            </button>
            <div class="absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-2">{dots}</div>
        }
        .into_view()
    }
}

/// Breaking headlines ticker. Renders nothing when there is no breaking news.
#[component]
pub fn BreakingNewsCarousel(articles: Vec<Article>) -> impl IntoView {
    if articles.is_empty() {
        return ().into_view();
    }
    let selector = use_rotating_selector(articles, BREAKING_INTERVAL_MS);
    let headline = move || {
        selector.current_item().map(|article| {
            view! {
                <a href=format!("/article/{}", article.id) class="font-semibold hover:underline">
                    {article.title}
                </a>
            }
        })
    };
    view! {
        <section class="relative bg-status-error-bg text-status-error-text rounded-lg px-14 py-3" aria-label="Breaking news">
            <span class="mr-3 px-2 py-0.5 rounded bg-status-error-text text-white text-xs font-bold">"BREAKING"</span>
            {headline}
            <CarouselControls selector=selector label="headline" />
        </section>
    }
    .into_view()
}

#[component]
pub fn AdvertisementCarousel(advertisements: Vec<Advertisement>) -> impl IntoView {
    if advertisements.is_empty() {
        return view! {
            <EmptyState
                title="No advertisements yet"
                description="New job listings will appear here."
            />
        }
        .into_view();
    }
    let api_base = config::cached_api_base_url();
    let selector = use_rotating_selector(advertisements, ADVERTISEMENT_INTERVAL_MS);
    let slide = move || {
        selector.current_item().map(|ad| {
            let image = resolve_image_url(ad.image_url.as_deref(), &api_base, ARTICLE_FALLBACK_IMAGE);
            let blurb = ad
                .description
                .as_deref()
                .map(|text| truncate(text, 140))
                .unwrap_or_default();
            view! {
                <a href=format!("/advertisement/{}", ad.id) class="block relative h-full min-h-[320px]">
                    <img src=image alt=ad.title.clone() class="absolute inset-0 w-full h-full object-cover" />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/85 via-black/60 to-black/40"></div>
                    <span class="absolute top-3 right-3 px-3 py-1 rounded-full bg-action-primary-bg text-white text-xs font-bold">
                        "ADVERTISEMENT"
                    </span>
                    <div class="absolute inset-0 flex flex-col justify-end p-6 text-white">
                        <h2 class="text-xl font-bold mb-1">{ad.title}</h2>
                        {ad.company.map(|company| view! { <p class="text-sm opacity-90">{company}</p> })}
                        <p class="text-sm opacity-90 mb-3">{blurb}</p>
                        <span class="font-semibold">"See More →"</span>
                    </div>
                </a>
            }
        })
    };
    view! {
        <section class="relative w-full overflow-hidden rounded-lg shadow-lg" aria-label="Advertisements">
            {slide}
            <CarouselControls selector=selector label="ad" />
        </section>
    }
    .into_view()
}

#[component]
pub fn AuctionCarousel(auctions: Vec<Auction>) -> impl IntoView {
    if auctions.is_empty() {
        return ().into_view();
    }
    let api_base = config::cached_api_base_url();
    let selector = use_rotating_selector(auctions, AUCTION_INTERVAL_MS);
    let slide = move || {
        selector.current_item().map(|auction| {
            let image = first_image(&auction.images, &api_base);
            let bid = display_bid(auction.current_bid, auction.starting_bid);
            let status = auction.status_label().to_uppercase();
            view! {
                <a href=format!("/auction/{}", auction.id) class="block relative min-h-[280px]">
                    <img src=image alt=auction.title.clone() class="absolute inset-0 w-full h-full object-cover" />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent"></div>
                    <span class="absolute top-3 left-3 px-2 py-0.5 rounded bg-status-warning-bg text-status-warning-text text-xs font-bold">
                        {status}
                    </span>
                    <div class="absolute bottom-0 p-5 text-white">
                        <h3 class="text-lg font-bold">{auction.title}</h3>
                        {auction.location.map(|place| view! { <p class="text-xs opacity-80">{place}</p> })}
                        <p class="text-sm mt-1">"Current bid: "<span class="font-semibold">{bid}</span></p>
                    </div>
                </a>
            }
        })
    };
    view! {
        <section class="relative w-full overflow-hidden rounded-lg shadow-lg" aria-label="Auctions">
            {slide}
            <CarouselControls selector=selector label="auction" />
        </section>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn articles(titles: &[&str]) -> Vec<Article> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                serde_json::from_value(json!({"id": i + 1, "title": title, "isBreaking": true}))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn breaking_carousel_shows_first_headline_and_dots() {
        let html = render_to_string(|| {
            view! { <BreakingNewsCarousel articles=articles(&["Floods in Rubavu", "Election results", "Budget"]) /> }
        });
        assert!(html.contains("BREAKING"));
        assert!(html.contains("Floods in Rubavu"));
        assert!(!html.contains("Election results"));
        assert!(html.contains("/article/1"));
        assert_eq!(html.matches("Go to headline").count(), 3);
    }

    #[test]
    fn single_headline_has_no_controls() {
        let html = render_to_string(|| {
            view! { <BreakingNewsCarousel articles=articles(&["Only story"]) /> }
        });
        assert!(html.contains("Only story"));
        assert!(!html.contains("Next headline"));
    }

    #[test]
    fn controls_follow_replaced_collection() {
        let html = render_to_string(|| {
            let selector = RotatingSelector::initialize(vec!["only"], 4000);
            assert_eq!(selector.len(), 1);
            selector.update_items(vec!["A", "B", "C", "D"]);
            view! { <div><CarouselControls selector=selector label="slide" /></div> }
        });
        assert_eq!(html.matches("Go to slide").count(), 4);
        assert!(html.contains("Next slide"));
    }

    #[test]
    fn empty_breaking_news_renders_nothing() {
        let html = render_to_string(|| {
            view! { <div><BreakingNewsCarousel articles=Vec::new() /></div> }
        });
        assert!(!html.contains("BREAKING"));
    }

    #[test]
    fn empty_advertisements_render_placeholder() {
        let html = render_to_string(|| {
            view! { <AdvertisementCarousel advertisements=Vec::new() /> }
        });
        assert!(html.contains("No advertisements yet"));
    }

    #[test]
    fn advertisement_carousel_resolves_upload_paths() {
        let html = render_to_string(|| {
            let ads: Vec<Advertisement> = serde_json::from_value(json!([
                {"id": 1, "title": "Driver wanted", "company": "Volcano", "imageUrl": "/uploads/driver.jpg"},
                {"id": 2, "title": "Accountant", "company": "BK"}
            ]))
            .unwrap();
            view! { <AdvertisementCarousel advertisements=ads /> }
        });
        assert!(html.contains("Driver wanted"));
        assert!(html.contains("/uploads/driver.jpg"));
        assert!(html.contains("Next ad"));
    }

    #[test]
    fn auction_carousel_shows_bid_and_link() {
        let html = render_to_string(|| {
            let auctions: Vec<Auction> = serde_json::from_value(json!([
                {"id": 9, "title": "Toyota RAV4", "currentBid": 15000, "status": "active"},
                {"id": 10, "title": "Plot in Kicukiro", "starting_bid": "8000"}
            ]))
            .unwrap();
            view! { <AuctionCarousel auctions=auctions /> }
        });
        assert!(html.contains("Toyota RAV4"));
        assert!(html.contains("15,000 RWF"));
        assert!(html.contains("/auction/9"));
        assert!(html.contains("ACTIVE"));
    }
}
