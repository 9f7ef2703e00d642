use leptos::*;

use crate::{
    api::{Advertisement, Article, Auction},
    config,
    utils::{
        format::{display_bid, format_date, format_views, truncate},
        media::{first_image, resolve_image_url, ARTICLE_FALLBACK_IMAGE},
    },
};

#[component]
pub fn ArticleCard(article: Article, #[prop(optional)] compact: bool) -> impl IntoView {
    let image = resolve_image_url(
        article.image_url.as_deref(),
        &config::cached_api_base_url(),
        ARTICLE_FALLBACK_IMAGE,
    );
    let href = format!("/article/{}", article.id);
    let category = article.category.as_ref().map(|c| c.name.clone());
    let published = article.published_at.as_deref().map(format_date);
    let excerpt = article
        .excerpt
        .as_deref()
        .filter(|_| !compact)
        .map(|text| truncate(text, 160));
    let views = format_views(article.views);
    let is_breaking = article.is_breaking;
    view! {
        <article class="bg-surface-elevated rounded-lg shadow overflow-hidden flex flex-col">
            <a href=href.clone() class="block">
                <img src=image alt=article.title.clone() class="w-full h-48 object-cover" loading="lazy" />
            </a>
            <div class="p-4 flex flex-col gap-2 flex-1">
                <div class="flex items-center gap-2 text-xs">
                    {category.map(|name| view! { <span class="px-2 py-0.5 rounded bg-surface-muted text-fg">{name}</span> })}
                    <Show when=move || is_breaking>
                        <span class="px-2 py-0.5 rounded bg-status-error-bg text-status-error-text font-bold">"BREAKING"</span>
                    </Show>
                </div>
                <a href=href class="text-lg font-semibold text-fg hover:underline">{article.title}</a>
                {excerpt.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                <div class="mt-auto flex justify-between text-xs text-fg-muted">
                    <span>{published}</span>
                    <span>{views}" views"</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn AdvertisementCard(advertisement: Advertisement) -> impl IntoView {
    let image = resolve_image_url(
        advertisement.image_url.as_deref(),
        &config::cached_api_base_url(),
        ARTICLE_FALLBACK_IMAGE,
    );
    let deadline = advertisement
        .deadline
        .as_deref()
        .map(|raw| format!("Deadline: {}", format_date(raw)));
    let description = advertisement
        .description
        .as_deref()
        .map(|text| truncate(text, 200))
        .unwrap_or_default();
    let href = format!("/advertisement/{}", advertisement.id);
    view! {
        <article class="bg-surface-elevated rounded-lg shadow overflow-hidden">
            <a href=href.clone() class="block">
                <img src=image alt=advertisement.title.clone() class="w-full h-40 object-cover" loading="lazy" />
            </a>
            <div class="p-4 space-y-1">
                <a href=href class="font-semibold text-fg hover:underline">{advertisement.title}</a>
                {advertisement.company.map(|company| view! { <p class="text-sm text-fg">{company}</p> })}
                <p class="text-xs text-fg-muted">
                    {advertisement.category.unwrap_or_default()}
                    {advertisement.location.map(|place| format!(" · {}", place))}
                </p>
                <p class="text-sm text-fg-muted">{description}</p>
                {deadline.map(|text| view! { <p class="text-xs font-medium text-status-warning-text">{text}</p> })}
            </div>
        </article>
    }
}

#[component]
pub fn AuctionCard(auction: Auction) -> impl IntoView {
    let image = first_image(&auction.images, &config::cached_api_base_url());
    let bid = display_bid(auction.current_bid, auction.starting_bid);
    let status = auction.status_label().to_string();
    view! {
        <a href=format!("/auction/{}", auction.id) class="block bg-surface-elevated rounded-lg shadow overflow-hidden">
            <img src=image alt=auction.title.clone() class="w-full h-40 object-cover" loading="lazy" />
            <div class="p-4 space-y-1">
                <h3 class="font-semibold text-fg">{auction.title}</h3>
                <p class="text-sm text-fg">"Current bid: "{bid}</p>
                <p class="text-xs uppercase text-fg-muted">{status}</p>
            </div>
        </a>
    }
}

/// Dashboard tile: a label over a count, or a dash while loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<usize>>,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <a href=href class="block bg-surface-elevated overflow-hidden shadow rounded-lg px-4 py-5 sm:p-6">
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="mt-1 text-3xl font-semibold text-fg">
                {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".into())}
            </dd>
        </a>
    }
}
