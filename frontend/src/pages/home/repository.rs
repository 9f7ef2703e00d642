use crate::api::{Advertisement, AdvertisementQuery, ApiClient, ApiError, Article, Auction, AuctionQuery};

pub const FEATURED_LIMIT: u32 = 6;
pub const LATEST_LIMIT: u32 = 50;
pub const ADVERTISEMENT_LIMIT: u32 = 10;
pub const AUCTION_LIMIT: u32 = 10;

/// Home sections never fail as a whole: a broken feed is logged and shown
/// as empty.
fn or_empty<T>(section: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        log::error!("Failed to load {}: {}", section, err);
        Vec::new()
    })
}

pub async fn fetch_featured(api: &ApiClient) -> Vec<Article> {
    or_empty("featured news", api.featured_articles(FEATURED_LIMIT).await)
}

pub async fn fetch_breaking(api: &ApiClient) -> Vec<Article> {
    or_empty("breaking news", api.breaking_articles().await)
}

pub async fn fetch_latest(api: &ApiClient) -> Vec<Article> {
    or_empty("latest news", api.latest_articles(LATEST_LIMIT).await)
}

pub async fn fetch_advertisements(api: &ApiClient) -> Vec<Advertisement> {
    let query = AdvertisementQuery {
        limit: Some(ADVERTISEMENT_LIMIT),
        ..Default::default()
    };
    or_empty("advertisements", api.list_advertisements(&query).await)
}

pub async fn fetch_auctions(api: &ApiClient) -> Vec<Auction> {
    or_empty(
        "auctions",
        api.list_auctions(&AuctionQuery::active(AUCTION_LIMIT)).await,
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    #[tokio::test]
    async fn failing_sections_degrade_to_empty() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/articles/breaking/all");
            then.status(200)
                .json_body(json!({"articles": [{"id": 1, "title": "Storm warning", "isBreaking": true}]}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/articles/featured");
            then.status(500).json_body(json!({"error": "db down"}));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"))
            .with_storage(Rc::new(MemoryStorage::new()));

        assert_eq!(fetch_breaking(&api).await.len(), 1);
        assert!(fetch_featured(&api).await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_backend_yields_empty_home() {
        let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
            .with_storage(Rc::new(MemoryStorage::new()));
        assert!(fetch_latest(&api).await.is_empty());
        assert!(fetch_advertisements(&api).await.is_empty());
        assert!(fetch_auctions(&api).await.is_empty());
    }
}
