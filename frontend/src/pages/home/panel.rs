use leptos::*;

use crate::{
    api::ApiClient,
    components::{
        cards::ArticleCard,
        carousel::{AdvertisementCarousel, AuctionCarousel, BreakingNewsCarousel},
        layout::{Layout, LoadingSpinner},
    },
    pages::home::repository,
    utils::format::format_date,
};

const LATEST_SHOWN: usize = 12;

#[component]
fn SectionHeading(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <h2 class="text-base md:text-xl font-bold text-fg border-l-4 border-action-primary-bg pl-3 mb-3">
            {title}
        </h2>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let api_featured = api.clone();
    let featured = create_local_resource(
        || (),
        move |_| {
            let api = api_featured.clone();
            async move { repository::fetch_featured(&api).await }
        },
    );
    let api_breaking = api.clone();
    let breaking = create_local_resource(
        || (),
        move |_| {
            let api = api_breaking.clone();
            async move { repository::fetch_breaking(&api).await }
        },
    );
    let api_latest = api.clone();
    let latest = create_local_resource(
        || (),
        move |_| {
            let api = api_latest.clone();
            async move { repository::fetch_latest(&api).await }
        },
    );
    let api_ads = api.clone();
    let advertisements = create_local_resource(
        || (),
        move |_| {
            let api = api_ads.clone();
            async move { repository::fetch_advertisements(&api).await }
        },
    );
    let auctions = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_auctions(&api).await }
        },
    );

    let breaking_view = move || match breaking.get() {
        None => view! { <div class="h-12 rounded-lg bg-surface-muted animate-pulse"></div> }.into_view(),
        Some(items) => view! { <BreakingNewsCarousel articles=items /> }.into_view(),
    };
    let advertisements_view = move || match advertisements.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(items) => view! { <AdvertisementCarousel advertisements=items /> }.into_view(),
    };
    let auctions_view = move || match auctions.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(items) => view! { <AuctionCarousel auctions=items /> }.into_view(),
    };
    let latest_view = move || match latest.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(items) if items.is_empty() => {
            view! { <p class="text-sm text-fg-muted">"No news yet."</p> }.into_view()
        }
        Some(items) => view! {
            <ul class="divide-y divide-border">
                {items
                    .into_iter()
                    .take(LATEST_SHOWN)
                    .map(|article| {
                        let date = article.published_at.as_deref().map(format_date);
                        view! {
                            <li class="py-2">
                                <a href=format!("/article/{}", article.id) class="text-sm font-medium text-fg hover:underline">
                                    {article.title}
                                </a>
                                <p class="text-xs text-fg-muted">{date}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    };
    let featured_view = move || {
        featured
            .get()
            .filter(|items| !items.is_empty())
            .map(|items| {
                view! {
                    <section class="mt-10">
                        <SectionHeading title="Featured" />
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {items
                                .into_iter()
                                .map(|article| view! { <ArticleCard article=article /> })
                                .collect_view()}
                        </div>
                    </section>
                }
            })
    };

    view! {
        <Layout>
            <div class="px-4 space-y-8">
                <section>
                    <SectionHeading title="Breaking News" />
                    {breaking_view}
                </section>
                <div class="grid gap-8 lg:grid-cols-3">
                    <section class="lg:col-span-2">
                        <SectionHeading title="Advertisements" />
                        {advertisements_view}
                    </section>
                    <section>
                        <SectionHeading title="Latest News" />
                        {latest_view}
                    </section>
                </div>
                <section>
                    <SectionHeading title="Auctions" />
                    {auctions_view}
                </section>
                {featured_view}
            </div>
        </Layout>
    }
}
