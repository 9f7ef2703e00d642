use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal yes/no prompt used before destructive admin actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let confirm_label = confirm_label
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "Delete".to_string());
    let confirm_text = Signal::derive(move || confirm_label.clone());
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                    <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
