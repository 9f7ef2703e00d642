use super::{
    client::ApiClient,
    types::{Account, ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Exchanges email/password for `{ token, user }`. Nothing is persisted
    /// here; the session decides whether the account may keep the token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/auth/login").await;
        self.fetch_item(self.http_client().post(&url).json(request), &["data"])
            .await
    }

    /// Verifies the stored credential with the backend and returns the
    /// account it belongs to.
    pub async fn verify(&self) -> Result<Account, ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url("/auth/me").await;
        self.fetch_item(self.http_client().get(&url).headers(headers), &["user"])
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::utils::storage::{KeyValueStore, MemoryStorage, TOKEN_KEY};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn login_posts_credentials_and_does_not_persist() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({"email": "ed@news.rw", "password": "pw"}));
            then.status(200).json_body(json!({
                "token": "tok-9",
                "user": {"id": 1, "email": "ed@news.rw", "name": "Ed", "role": "admin"}
            }));
        });
        let storage = Rc::new(MemoryStorage::new());
        let api = ApiClient::new_with_base_url(server.url("/api")).with_storage(storage.clone());

        let response = api
            .login(&LoginRequest {
                email: "ed@news.rw".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.token, "tok-9");
        assert_eq!(response.user.role, Role::Admin);
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn login_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({"error": "Invalid credentials"}));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStorage::new()));
        let err = api
            .login(&LoginRequest {
                email: "x@y.z".into(),
                password: "bad".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.error, "Invalid credentials");
    }

    #[tokio::test]
    async fn verify_sends_bearer_and_unwraps_user() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("Authorization", "Bearer tok-1");
            then.status(200).json_body(json!({
                "success": true,
                "user": {"id": "4", "email": "root@news.rw", "role": "superadmin"}
            }));
        });
        let storage = Rc::new(MemoryStorage::with_entries([(TOKEN_KEY, "tok-1")]));
        let api = ApiClient::new_with_base_url(server.url("/api")).with_storage(storage);

        let account = api.verify().await.unwrap();
        mock.assert();
        assert_eq!(account.id, 4);
        assert_eq!(account.role, Role::SuperAdmin);
    }

    #[tokio::test]
    async fn verify_without_token_never_hits_backend() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(200).json_body(json!({"user": {}}));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStorage::new()));
        assert!(api.verify().await.unwrap_err().is_unauthorized());
        mock.assert_hits(0);
    }
}
