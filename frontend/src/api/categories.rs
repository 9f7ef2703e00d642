use super::{
    client::ApiClient,
    types::{ApiError, Category},
};

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.url("/categories").await;
        self.fetch_list(self.http_client().get(&url), &["categories"])
            .await
    }

    pub async fn get_category(&self, slug: &str) -> Result<Category, ApiError> {
        let url = self.url(&format!("/categories/{}", slug)).await;
        self.fetch_item(self.http_client().get(&url), &["category"])
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn categories_list_and_lookup() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/categories");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 1, "name": "Politics", "nameRw": "Politiki", "slug": "politics"},
                    {"id": 2, "name": "Sports", "slug": "sports"}
                ]
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/categories/sports");
            then.status(200)
                .json_body(json!({"category": {"id": 2, "name": "Sports", "slug": "sports"}}));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStorage::new()));

        let all = api.list_categories().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name_rw.as_deref(), Some("Politiki"));

        let sports = api.get_category("sports").await.unwrap();
        assert_eq!(sports.id, 2);
    }
}
