use crate::{api::ApiError, components::error::InlineErrorMessage, pages::admin_login::utils::LoginFormState};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-fg rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-border-hover sm:text-sm";

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Admin Login"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Sign in to manage the news portal"</p>
                </div>
                <form class="mt-8 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="admin@example.com"
                            prop:value=move || form.email.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            prop:value=move || form.password.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.password.set(target.value());
                            }
                        />
                    </div>
                    <InlineErrorMessage error=error />
                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <p class="text-center text-sm">
                        <a href="/" class="text-fg-muted hover:underline">"Back to the news portal"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_error_and_pending_label() {
        let html = render_to_string(|| {
            let form = LoginFormState::default();
            let error = Signal::derive(|| Some(ApiError::validation("Please enter your password")));
            view! {
                <LoginForm
                    form=form
                    error=error
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| ())
                />
            }
        });
        assert!(html.contains("Admin Login"));
        assert!(html.contains("Please enter your password"));
        assert!(html.contains("Signing in..."));
    }
}
