use super::{
    client::ApiClient,
    types::{Ad, AdQuery, Advertisement, AdvertisementQuery, ApiError},
};

impl ApiClient {
    pub async fn list_advertisements(
        &self,
        query: &AdvertisementQuery,
    ) -> Result<Vec<Advertisement>, ApiError> {
        let url = self
            .url(&format!("/advertisements{}", query.to_query_string()))
            .await;
        self.fetch_list(self.http_client().get(&url), &["advertisements"])
            .await
    }

    pub async fn get_advertisement(&self, id: i64) -> Result<Advertisement, ApiError> {
        let url = self.url(&format!("/advertisements/{}", id)).await;
        self.fetch_item(self.http_client().get(&url), &["advertisement"])
            .await
    }

    pub async fn record_advertisement_view(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/advertisements/{}/view", id)).await;
        self.send_unit(self.http_client().post(&url)).await
    }

    pub async fn delete_advertisement(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/advertisements/{}", id)).await;
        self.send_unit(self.http_client().delete(&url).headers(headers))
            .await
    }

    /// Banner ads (`/ads`).
    pub async fn list_ads(&self, query: &AdQuery) -> Result<Vec<Ad>, ApiError> {
        let url = self.url(&format!("/ads{}", query.to_query_string())).await;
        self.fetch_list(
            self.http_client()
                .get(&url)
                .headers(self.optional_auth_headers()),
            &["ads"],
        )
        .await
    }

    pub async fn delete_ad(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/ads/{}", id)).await;
        self.send_unit(self.http_client().delete(&url).headers(headers))
            .await
    }
}
