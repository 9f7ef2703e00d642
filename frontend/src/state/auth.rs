use std::rc::Rc;

use leptos::*;

use crate::{
    api::{Account, ApiClient, ApiError, LoginRequest},
    state::session::{Session, SessionPhase},
    utils::storage::{KeyValueStore, StorageError, ACCOUNT_KEY, TOKEN_KEY},
};

pub type AuthContext = (ReadSignal<Session>, WriteSignal<Session>);

pub const ADMIN_REQUIRED_MESSAGE: &str = "Access denied. Admin privileges required.";

/// Persisted half of the session: the `token` / `user` pair. This is the
/// only writer of those keys.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn for_client(api: &ApiClient) -> Self {
        Self::new(api.storage())
    }

    pub fn load(&self) -> Session {
        let credential = self.storage.get(TOKEN_KEY);
        let account = self.storage.get(ACCOUNT_KEY).and_then(|raw| {
            serde_json::from_str::<Account>(&raw)
                .map_err(|err| log::warn!("Ignoring unreadable cached account: {}", err))
                .ok()
        });
        Session::hydrated(credential, account)
    }

    pub fn persist(&self, credential: &str, account: &Account) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(account).map_err(|err| StorageError::Encode {
            key: ACCOUNT_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, credential)?;
        self.storage.set(ACCOUNT_KEY, &encoded)
    }

    pub fn cache_account(&self, account: &Account) {
        match serde_json::to_string(account) {
            Ok(encoded) => {
                if let Err(err) = self.storage.set(ACCOUNT_KEY, &encoded) {
                    log::warn!("{}", err);
                }
            }
            Err(err) => log::warn!("Failed to encode account: {}", err),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.storage
            .get(TOKEN_KEY)
            .is_some_and(|token| !token.trim().is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ACCOUNT_KEY);
    }
}

fn create_auth_context(store: &SessionStore) -> AuthContext {
    create_signal(store.load())
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let store = SessionStore::for_client(&api);
    let (session, set_session) = create_auth_context(&store);
    provide_context::<AuthContext>((session, set_session));
    provide_context(store.clone());

    spawn_local(async move {
        verify_session(&api, &store, set_session).await;
    });

    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(Session::default()))
}

pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        SessionStore::for_client(&api)
    })
}

/// First half of startup verification. Moves `Unknown` forward and reports
/// whether the backend has to be asked.
pub fn start_verification(set_session: WriteSignal<Session>) -> bool {
    set_session
        .try_update(Session::begin_verification)
        .unwrap_or(false)
}

/// Second half: asks `/auth/me` and settles the phase. Any failure, network
/// included, ends in `Unauthenticated` with the persisted pair removed.
pub async fn finish_verification(
    api: &ApiClient,
    store: &SessionStore,
    set_session: WriteSignal<Session>,
) {
    match api.verify().await {
        Ok(account) => {
            let applied = set_session
                .try_update(|session| {
                    let pending = session.phase == SessionPhase::Verifying;
                    session.verified(account.clone());
                    pending
                })
                .unwrap_or(false);
            if applied {
                log::info!("Session verified for {} ({})", account.email, account.role);
                store.cache_account(&account);
            }
        }
        Err(err) => {
            let cleared = set_session
                .try_update(|session| {
                    if session.phase != SessionPhase::Verifying {
                        return false;
                    }
                    session.clear();
                    true
                })
                .unwrap_or(false);
            if cleared {
                log::info!("Session verification failed: {}", err);
                store.clear();
            }
        }
    }
}

pub async fn verify_session(api: &ApiClient, store: &SessionStore, set_session: WriteSignal<Session>) {
    if start_verification(set_session) {
        finish_verification(api, store, set_session).await;
    } else if !store.has_credential() {
        store.clear();
    }
}

/// Signs in through the backend. Only admin accounts are kept; anything
/// else is rejected without touching the session.
pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    store: &SessionStore,
    set_session: WriteSignal<Session>,
) -> Result<(), ApiError> {
    let response = match api.login(&request).await {
        Ok(response) => response,
        Err(err) => {
            store.clear();
            set_session.update(Session::clear);
            return Err(err);
        }
    };

    if !response.user.role.is_admin() {
        log::warn!(
            "Rejected sign-in for {} with role {}",
            response.user.email,
            response.user.role
        );
        return Err(ApiError::forbidden(ADMIN_REQUIRED_MESSAGE));
    }

    if let Err(err) = store.persist(&response.token, &response.user) {
        store.clear();
        set_session.update(Session::clear);
        return Err(err.into());
    }

    log::info!("Signed in as {}", response.user.email);
    set_session.update(|session| session.signed_in(response.token, response.user));
    Ok(())
}

pub fn logout(store: &SessionStore, set_session: WriteSignal<Session>) {
    store.clear();
    set_session.update(Session::clear);
}

/// Ends the session when an admin call comes back `UNAUTHORIZED`. The guard
/// then redirects to the login page. Returns whether the session was ended.
pub fn expire_session(err: &ApiError, store: &SessionStore, set_session: WriteSignal<Session>) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    log::warn!("Session expired: {}", err);
    logout(store, set_session);
    true
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let store = use_session_store();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        let store = store.clone();
        async move { login_request(payload, &api, &store, set_session).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_session, set_session) = use_auth();
    let store = use_session_store();
    Callback::new(move |_| logout(&store, set_session))
}

pub fn use_session_expiry() -> Callback<ApiError, bool> {
    let (_session, set_session) = use_auth();
    let store = use_session_store();
    Callback::new(move |err: ApiError| expire_session(&err, &store, set_session))
}
