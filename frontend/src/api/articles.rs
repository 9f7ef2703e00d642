use super::{
    client::ApiClient,
    types::{search_query_string, ApiError, Article, ArticleQuery, ToggleBreakingRequest},
};

const ARTICLE_KEYS: &[&str] = &["articles"];

impl ApiClient {
    pub async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, ApiError> {
        let url = self
            .url(&format!("/articles{}", query.to_query_string()))
            .await;
        self.fetch_list(
            self.http_client()
                .get(&url)
                .headers(self.optional_auth_headers()),
            ARTICLE_KEYS,
        )
        .await
    }

    pub async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        let url = self.url(&format!("/articles/{}", id)).await;
        self.fetch_item(self.http_client().get(&url), &["article"])
            .await
    }

    pub async fn breaking_articles(&self) -> Result<Vec<Article>, ApiError> {
        let url = self.url("/articles/breaking/all").await;
        self.fetch_list(self.http_client().get(&url), ARTICLE_KEYS)
            .await
    }

    pub async fn latest_articles(&self, limit: u32) -> Result<Vec<Article>, ApiError> {
        let url = self.url(&format!("/articles/latest?limit={}", limit)).await;
        self.fetch_list(self.http_client().get(&url), ARTICLE_KEYS)
            .await
    }

    pub async fn featured_articles(&self, limit: u32) -> Result<Vec<Article>, ApiError> {
        let url = self
            .url(&format!("/articles/featured?limit={}", limit))
            .await;
        self.fetch_list(self.http_client().get(&url), ARTICLE_KEYS)
            .await
    }

    pub async fn search_articles(&self, query: &str, limit: u32) -> Result<Vec<Article>, ApiError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let url = self
            .url(&format!("/articles/search{}", search_query_string(query, limit)))
            .await;
        self.fetch_list(self.http_client().get(&url), ARTICLE_KEYS)
            .await
    }

    /// Best-effort view counter bump.
    pub async fn record_article_view(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/articles/{}/view", id)).await;
        self.send_unit(self.http_client().post(&url)).await
    }

    pub async fn set_article_breaking(&self, id: i64, is_breaking: bool) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/articles/{}/breaking", id)).await;
        self.send_unit(
            self.http_client()
                .patch(&url)
                .headers(headers)
                .json(&ToggleBreakingRequest { is_breaking }),
        )
        .await
    }

    pub async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/articles/{}", id)).await;
        self.send_unit(self.http_client().delete(&url).headers(headers))
            .await
    }
}
