use std::future::Future;

use crate::api::{ApiClient, ApiError};
use crate::state::auth::use_session_expiry;
use leptos::*;

/// Row awaiting confirmation in the delete dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub id: i64,
    pub title: String,
}

/// Routes an admin call failure: a rejected credential ends the session (the
/// guard then leaves the page), anything else is shown inline.
pub fn report_error(err: ApiError, expire: Callback<ApiError, bool>, sink: RwSignal<Option<ApiError>>) {
    if !expire.call(err.clone()) {
        sink.set(Some(err));
    }
}

/// Bumped after every successful mutation; list resources key on it.
pub fn use_reload() -> RwSignal<u32> {
    create_rw_signal(0u32)
}

pub fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

/// Ends the session when a list load is rejected for its credential. Other
/// load failures are rendered by the list itself.
pub fn expire_on_load_error<S, T>(resource: Resource<S, Result<T, ApiError>>)
where
    S: Clone + 'static,
    T: Clone + 'static,
{
    let expire = use_session_expiry();
    create_effect(move |_| {
        if let Some(Err(err)) = resource.get() {
            expire.call(err);
        }
    });
}

#[derive(Clone, Copy)]
pub struct DeleteFlow {
    pub target: RwSignal<Option<PendingDelete>>,
    pub error: RwSignal<Option<ApiError>>,
    pub action: Action<i64, Result<i64, ApiError>>,
}

impl DeleteFlow {
    pub fn ask(&self, id: i64, title: impl Into<String>) {
        self.error.set(None);
        self.target.set(Some(PendingDelete {
            id,
            title: title.into(),
        }));
    }

    pub fn cancel(&self) {
        if !self.action.pending().get_untracked() {
            self.target.set(None);
        }
    }

    pub fn confirm(&self) {
        if self.action.pending().get_untracked() {
            return;
        }
        if let Some(pending) = self.target.get_untracked() {
            self.action.dispatch(pending.id);
        }
    }

    pub fn is_open(&self) -> Signal<bool> {
        let target = self.target;
        Signal::derive(move || target.with(Option::is_some))
    }

    pub fn message(&self) -> Signal<String> {
        let target = self.target;
        Signal::derive(move || {
            target
                .get()
                .map(|p| format!("\"{}\" will be permanently deleted.", p.title))
                .unwrap_or_default()
        })
    }
}

/// Confirm-then-delete state for one admin list. `delete` performs the call;
/// `reload` is bumped when it succeeds.
pub fn use_delete_flow<F, Fut>(delete: F, reload: RwSignal<u32>) -> DeleteFlow
where
    F: Fn(ApiClient, i64) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let expire = use_session_expiry();
    let target = create_rw_signal(None::<PendingDelete>);
    let error = create_rw_signal(None::<ApiError>);
    let action = create_action(move |id: &i64| {
        let id = *id;
        let request = delete(api.clone(), id);
        async move { request.await.map(|_| id) }
    });

    create_effect(move |_| {
        let Some(result) = action.value().get() else {
            return;
        };
        target.set(None);
        match result {
            Ok(id) => {
                log::info!("Deleted item {}", id);
                error.set(None);
                bump(reload);
            }
            Err(err) => report_error(err, expire, error),
        }
    });

    DeleteFlow {
        target,
        error,
        action,
    }
}
