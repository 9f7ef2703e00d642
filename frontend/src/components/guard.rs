use crate::{
    components::layout::LoadingSpinner,
    state::{auth::use_auth, session::SessionPhase},
};
use leptos::*;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Redirect,
    AccessDenied,
    Children,
}

/// What a protected route shows for a given phase. Only the verified admin
/// phase reaches the children.
pub fn guard_view(phase: SessionPhase) -> GuardView {
    match phase {
        SessionPhase::Unknown | SessionPhase::Verifying => GuardView::Loading,
        SessionPhase::Unauthenticated => GuardView::Redirect,
        SessionPhase::AuthenticatedNonAdmin => GuardView::AccessDenied,
        SessionPhase::AuthenticatedAdmin => GuardView::Children,
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();
    let decision = create_memo(move |_| guard_view(session.get().phase));
    create_effect(move |_| {
        if decision.get() != GuardView::Redirect {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(ADMIN_LOGIN_PATH);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardView::Children
            fallback=move || match decision.get() {
                GuardView::Loading => view! {
                    <div class="min-h-screen flex flex-col items-center justify-center">
                        <LoadingSpinner />
                        <p class="text-sm text-fg-muted">"Verifying access..."</p>
                    </div>
                }
                .into_view(),
                GuardView::AccessDenied => view! { <AccessDenied /> }.into_view(),
                _ => ().into_view(),
            }
        >
            {children()}
        </Show>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full text-center bg-surface-elevated rounded-lg shadow p-8 space-y-4">
                <h1 class="text-2xl font-bold text-status-error-text">"Access Denied"</h1>
                <p class="text-fg-muted">"You do not have permission to access the admin panel."</p>
                <a
                    href="/"
                    class="inline-block px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text"
                >
                    "Go to Homepage"
                </a>
            </div>
        </div>
    }
}
