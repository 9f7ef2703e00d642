use crate::{
    api::{ApiClient, Category},
    components::guard::ADMIN_LOGIN_PATH,
    state::auth::{use_auth, use_logout},
};
use leptos::{ev::SubmitEvent, *};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use web_sys::HtmlInputElement;

/// Standing news sections, used until the backend's category list arrives.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("politics", "Politics"),
    ("economics", "Economics"),
    ("sports", "Sports"),
    ("health", "Health"),
    ("entertainment", "Entertainment"),
];

pub const ADMIN_NAV_ITEMS: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/articles", "Articles"),
    ("/admin/advertisements", "Advertisements"),
    ("/admin/auctions", "Auctions"),
    ("/admin/ads", "Banner Ads"),
];

/// Header links: home, one per category, then the classifieds sections.
pub fn nav_links(categories: &[Category]) -> Vec<(String, String)> {
    let mut links = vec![("/".to_string(), "Home".to_string())];
    let from_backend: Vec<(String, String)> = categories
        .iter()
        .filter(|c| !c.slug.trim().is_empty())
        .map(|c| (format!("/category/{}", c.slug.trim()), c.name.clone()))
        .collect();
    if from_backend.is_empty() {
        links.extend(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(slug, label)| (format!("/category/{}", slug), label.to_string())),
        );
    } else {
        links.extend(from_backend);
    }
    links.push(("/advertisements".to_string(), "Advertisements".to_string()));
    links.push(("/auctions".to_string(), "Auctions".to_string()));
    links
}

/// Search page URL for a query; blank queries go nowhere.
pub fn search_href(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", utf8_percent_encode(query, NON_ALPHANUMERIC)))
}

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let (session, _) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let (query, set_query) = create_signal(String::new());

    let categories = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move {
                api.list_categories().await.unwrap_or_else(|err| {
                    log::warn!("Category list unavailable: {}", err);
                    Vec::new()
                })
            }
        },
    );
    let links = move || nav_links(&categories.get().unwrap_or_default());

    let admin_href = move || {
        if session.get().is_admin() {
            "/admin"
        } else {
            ADMIN_LOGIN_PATH
        }
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(href) = search_href(&query.get_untracked()) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(&href);
        }
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center gap-4 h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"News Portal"</a>
                    <nav class="hidden lg:flex space-x-2">
                        {move || {
                            links()
                                .into_iter()
                                .map(|(href, label)| view! { <a href=href class=NAV_LINK_CLASS>{label}</a> })
                                .collect_view()
                        }}
                        <a href=admin_href class=NAV_LINK_CLASS>"Admin"</a>
                    </nav>
                    <form role="search" class="hidden md:block" on:submit=on_search>
                        <input
                            type="search"
                            name="q"
                            placeholder="Search news"
                            aria-label="Search news"
                            class="rounded-md border border-border bg-surface px-3 py-1 text-sm text-fg"
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                set_query.set(target.value());
                            }
                        />
                    </form>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                        </span>
                        "☰"
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-2">
                        {move || {
                            links()
                                .into_iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=href
                                            class="block"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surface-muted border-t border-border mt-12">
            <div class="max-w-7xl mx-auto px-4 py-6 text-sm text-fg-muted flex flex-wrap gap-4 justify-between">
                <span>"News Portal. Latest news, jobs and auctions."</span>
                <a href="/advertisements" class="hover:text-fg">"Job listings"</a>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-surface">
            <Header />
            <main class="flex-1 max-w-7xl w-full mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let (session, _) = use_auth();
    let logout = use_logout();
    let account_label = move || {
        session
            .get()
            .account
            .map(|account| account.label().to_string())
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        logout.call(());
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(ADMIN_LOGIN_PATH);
        }
    };
    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 flex flex-wrap items-center justify-between gap-4 h-16">
                    <a href="/admin" class="text-lg font-semibold text-fg">"Admin Panel"</a>
                    <nav class="flex flex-wrap gap-1">
                        {ADMIN_NAV_ITEMS
                            .iter()
                            .map(|(href, label)| view! { <a href={*href} class=NAV_LINK_CLASS>{*label}</a> })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-3">
                        <span class="text-sm text-fg-muted">{account_label}</span>
                        <a href="/" class=NAV_LINK_CLASS>"View site"</a>
                        <button on:click=on_logout class=NAV_LINK_CLASS>"Logout"</button>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-6 px-4">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            {message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(slug: &str, name: &str) -> Category {
        Category {
            id: 1,
            name: name.into(),
            name_rw: None,
            slug: slug.into(),
            description: None,
        }
    }

    #[test]
    fn nav_uses_standing_sections_until_categories_load() {
        let links = nav_links(&[]);
        assert_eq!(links.first().map(|(href, _)| href.as_str()), Some("/"));
        assert!(links.iter().any(|(href, _)| href == "/category/entertainment"));
        assert!(links.iter().any(|(href, _)| href == "/auctions"));
        assert_eq!(links.len(), DEFAULT_CATEGORIES.len() + 3);
    }

    #[test]
    fn nav_follows_backend_categories() {
        let links = nav_links(&[category("technology", "Technology"), category(" ", "Unlisted")]);
        let hrefs: Vec<&str> = links.iter().map(|(href, _)| href.as_str()).collect();
        assert_eq!(hrefs, vec!["/", "/category/technology", "/advertisements", "/auctions"]);
    }

    #[test]
    fn search_href_encodes_query_and_skips_blank() {
        assert_eq!(search_href("  "), None);
        assert_eq!(search_href(" rain & floods ").as_deref(), Some("/search?q=rain%20%26%20floods"));
    }
}
