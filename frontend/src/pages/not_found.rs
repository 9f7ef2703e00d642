use leptos::*;

use crate::components::layout::Layout;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 py-24 text-center space-y-4">
                <p class="text-6xl font-bold text-fg-muted">"404"</p>
                <h1 class="text-2xl font-semibold text-fg">"Page not found"</h1>
                <p class="text-sm text-fg-muted">"The page you are looking for does not exist or has moved."</p>
                <a href="/" class="inline-block rounded-md bg-action-primary-bg text-action-primary-text px-4 py-2 text-sm font-semibold">
                    "Back to home"
                </a>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn links_back_home() {
        let html = render_to_string(|| {
            provide_session(SessionPhase::Unauthenticated, None);
            view! { <NotFoundPage /> }
        });
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
