use crate::pages::admin_login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            pending=pending
            on_submit=on_submit
        />
    }
}
