use super::utils::{validate_credentials, LoginFormState, ADMIN_HOME_PATH};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

fn go_to_admin() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(ADMIN_HOME_PATH);
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates the form locally and dispatches the login. Returns whether a
    /// request was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = validate_credentials(&email, &password) {
            self.error.set(Some(ApiError::validation(msg)));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let (session, _) = auth::use_auth();

    create_effect(move |_| {
        if session.with(|s| s.is_admin()) {
            go_to_admin();
        }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                    go_to_admin();
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
