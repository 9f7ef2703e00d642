use leptos::*;
use leptos_router::use_params_map;

use crate::{
    api::{Advertisement, ApiClient, ApiError, ContactInfo},
    components::{
        error::LoadFailure,
        layout::{Layout, LoadingSpinner},
    },
    config,
    pages::article::{paragraphs, parse_id},
    utils::{
        format::{format_date, format_views},
        media::{resolve_image_url, ARTICLE_FALLBACK_IMAGE},
    },
};

#[component]
fn BulletList(#[prop(into)] title: String, items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-bold text-fg">{title}</h2>
            <ul class="list-disc list-inside space-y-1 text-fg">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </section>
    }
    .into_view()
}

#[component]
fn ContactPanel(contact: ContactInfo, location: Option<String>) -> impl IntoView {
    let website = contact.website_href().zip(contact.website.clone());
    let address = contact.address.clone().or(location);
    view! {
        <aside class="bg-surface-elevated rounded-lg shadow p-6 space-y-3 h-fit">
            <h2 class="text-lg font-bold text-fg">"Contact"</h2>
            {contact.phone.map(|phone| view! {
                <p class="text-sm"><a href=format!("tel:{}", phone) class="text-fg hover:underline">{phone}</a></p>
            })}
            {contact.email.map(|email| view! {
                <p class="text-sm"><a href=format!("mailto:{}", email) class="text-fg hover:underline">{email}</a></p>
            })}
            {website.map(|(href, label)| view! {
                <p class="text-sm">
                    <a href=href target="_blank" rel="noopener noreferrer" class="text-action-primary-bg hover:underline">{label}</a>
                </p>
            })}
            {address.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </aside>
    }
}

#[component]
fn AdvertisementDetail(advertisement: Advertisement) -> impl IntoView {
    let image = resolve_image_url(
        advertisement.image_url.as_deref(),
        &config::cached_api_base_url(),
        ARTICLE_FALLBACK_IMAGE,
    );
    let meta = [
        advertisement.category.clone(),
        advertisement.location.clone(),
        advertisement.created_at.as_deref().map(|raw| format!("Posted {}", format_date(raw))),
        Some(format!("{} views", format_views(advertisement.views))),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let deadline = advertisement
        .deadline
        .as_deref()
        .map(|raw| format!("Deadline: {}", format_date(raw)));
    let body = paragraphs(advertisement.description.as_deref().unwrap_or_default());
    view! {
        <div class="grid gap-8 lg:grid-cols-3">
            <article class="lg:col-span-2 bg-surface-elevated rounded-lg shadow overflow-hidden">
                <img src=image alt=advertisement.title.clone() class="w-full max-h-[360px] object-cover" />
                <div class="p-6 space-y-4">
                    <h1 class="text-3xl font-bold text-fg">{advertisement.title}</h1>
                    {advertisement.company.map(|company| view! { <p class="text-lg font-semibold text-fg">{company}</p> })}
                    <p class="text-sm text-fg-muted">{meta}</p>
                    {deadline.map(|text| view! { <p class="text-sm font-medium text-status-warning-text">{text}</p> })}
                    <div class="space-y-3 text-fg leading-relaxed">
                        {if body.is_empty() {
                            view! { <p class="text-fg-muted">"No description available"</p> }.into_view()
                        } else {
                            body.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()
                        }}
                    </div>
                    <BulletList title="Requirements" items=advertisement.requirements />
                    <BulletList title="Benefits" items=advertisement.benefits />
                </div>
            </article>
            <ContactPanel contact=advertisement.contact location=advertisement.location />
        </div>
    }
}

fn advertisement_view(result: Result<Advertisement, ApiError>) -> View {
    match result {
        Ok(advertisement) => view! { <AdvertisementDetail advertisement=advertisement /> }.into_view(),
        Err(err) => view! { <LoadFailure error=err not_found="Advertisement not found" /> }.into_view(),
    }
}

#[component]
pub fn AdvertisementDetailPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let params = use_params_map();
    let advertisement_id =
        create_memo(move |_| params.with(|p| parse_id(p.get("id").map(String::as_str))));

    let api_view = api.clone();
    create_effect(move |_| {
        let Some(id) = advertisement_id.get() else {
            return;
        };
        let api = api_view.clone();
        spawn_local(async move {
            if let Err(err) = api.record_advertisement_view(id).await {
                log::debug!("View count for advertisement {} not recorded: {}", id, err);
            }
        });
    });

    let advertisement = create_local_resource(
        move || advertisement_id.get(),
        move |id| {
            let api = api.clone();
            async move {
                match id {
                    Some(id) => api.get_advertisement(id).await,
                    None => Err(ApiError::not_found("Advertisement not found")),
                }
            }
        },
    );

    let content = move || match advertisement.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(result) => advertisement_view(result),
    };

    view! {
        <Layout>
            <div class="px-4 space-y-4">
                <a href="/advertisements" class="text-sm text-action-primary-bg hover:underline">"← Back to advertisements"</a>
                {content}
            </div>
        </Layout>
    }
}
