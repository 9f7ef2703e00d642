#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use crate::api::{Account, ApiClient, Role};
    use crate::state::auth::AuthContext;
    use crate::state::session::{Session, SessionPhase};
    use crate::utils::storage::MemoryStorage;
    use leptos::*;

    pub fn admin_account() -> Account {
        Account {
            id: 1,
            email: "admin@newsportal.rw".into(),
            display_name: Some("Portal Admin".into()),
            role: Role::Admin,
        }
    }

    pub fn editor_account() -> Account {
        Account {
            id: 2,
            email: "editor@newsportal.rw".into(),
            display_name: Some("Desk Editor".into()),
            role: Role::Editor,
        }
    }

    pub fn provide_session(phase: SessionPhase, account: Option<Account>) -> AuthContext {
        let credential = account.as_ref().map(|_| "test-token".to_string());
        let context = create_signal(Session {
            credential,
            account,
            phase,
        });
        provide_context::<AuthContext>(context);
        context
    }

    /// Client pointed at a dead local port with in-memory storage, so views
    /// can be rendered without touching `window`.
    pub fn provide_offline_api() -> ApiClient {
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_storage(Rc::new(MemoryStorage::new()));
        provide_context(api.clone());
        api
    }
}
