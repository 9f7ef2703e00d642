use leptos::*;

/// Placeholder for an empty collection, with an optional link out.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] action_href: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
) -> impl IntoView {
    let action = action_href.map(|href| {
        let label = action_label.unwrap_or_else(|| "Browse".to_string());
        view! {
            <a href=href class="mt-4 inline-block text-sm font-medium text-action-primary-bg hover:underline">
                {label}
            </a>
        }
    });
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <svg class="mx-auto h-12 w-12 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 20H5a2 2 0 01-2-2V6a2 2 0 012-2h10l4 4v10a2 2 0 01-2 2zM7 8h6M7 12h10M7 16h10" />
            </svg>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
            {action}
        </div>
    }
}
