use leptos::*;

use crate::{
    components::{confirm_dialog::ConfirmDialog, error::InlineErrorMessage},
    pages::admin::view_model::DeleteFlow,
};

const CELL_CLASS: &str = "px-4 py-3 text-sm text-fg";

/// Page heading with item count.
#[component]
pub fn ListHeader(#[prop(into)] title: String, #[prop(into)] count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="flex items-baseline justify-between mb-4">
            <h1 class="text-2xl font-bold text-fg">{title}</h1>
            <span class="text-sm text-fg-muted">
                {move || count.get().map(|n| format!("{} total", n))}
            </span>
        </div>
    }
}

#[component]
pub fn AdminTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {headers
                            .iter()
                            .map(|h| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{*h}</th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">{children()}</tbody>
            </table>
        </div>
    }
}

#[component]
pub fn Cell(children: Children) -> impl IntoView {
    view! { <td class=CELL_CLASS>{children()}</td> }
}

#[component]
pub fn DeleteButton(flow: DeleteFlow, id: i64, #[prop(into)] title: String) -> impl IntoView {
    view! {
        <button
            type="button"
            class="text-sm font-medium text-status-error-text hover:underline disabled:opacity-50"
            disabled=move || flow.action.pending().get()
            on:click=move |_| flow.ask(id, title.clone())
        >
            "Delete"
        </button>
    }
}

/// Inline error line plus the confirmation dialog of a delete flow.
#[component]
pub fn DeleteControls(flow: DeleteFlow, #[prop(into)] noun: String) -> impl IntoView {
    let pending = flow.action.pending();
    view! {
        <InlineErrorMessage error=flow.error />
        <ConfirmDialog
            is_open=flow.is_open()
            title=format!("Delete {}", noun)
            message=flow.message()
            on_confirm=Callback::new(move |_| flow.confirm())
            on_cancel=Callback::new(move |_| flow.cancel())
            pending=pending
        />
    }
}
