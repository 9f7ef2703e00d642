use crate::api::{
    Ad, AdQuery, Advertisement, AdvertisementQuery, ApiClient, ApiError, Article, ArticleQuery,
    Auction, AuctionQuery,
};

pub const ADMIN_LIST_LIMIT: u32 = 100;

pub async fn list_articles(api: &ApiClient) -> Result<Vec<Article>, ApiError> {
    let query = ArticleQuery {
        limit: Some(ADMIN_LIST_LIMIT),
        ..Default::default()
    };
    api.list_articles(&query).await
}

pub async fn list_advertisements(api: &ApiClient) -> Result<Vec<Advertisement>, ApiError> {
    let query = AdvertisementQuery {
        limit: Some(ADMIN_LIST_LIMIT),
        ..Default::default()
    };
    api.list_advertisements(&query).await
}

pub async fn list_auctions(api: &ApiClient) -> Result<Vec<Auction>, ApiError> {
    let query = AuctionQuery {
        limit: Some(ADMIN_LIST_LIMIT),
        ..Default::default()
    };
    api.list_auctions(&query).await
}

pub async fn list_ads(api: &ApiClient) -> Result<Vec<Ad>, ApiError> {
    let query = AdQuery {
        limit: Some(ADMIN_LIST_LIMIT),
        ..Default::default()
    };
    api.list_ads(&query).await
}

/// Dashboard counters. `None` marks a collection that failed to load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub articles: Option<usize>,
    pub breaking: Option<usize>,
    pub active_ads: Option<usize>,
    pub advertisements: Option<usize>,
    pub auctions: Option<usize>,
}

pub fn count_breaking(articles: &[Article]) -> usize {
    articles.iter().filter(|a| a.is_breaking).count()
}

pub fn count_active(ads: &[Ad]) -> usize {
    ads.iter().filter(|ad| ad.is_active).count()
}

/// Loads every collection concurrently. Individual failures only blank their
/// counter; a rejected credential fails the whole call so the session can be
/// ended.
pub async fn fetch_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    let (articles, ads, advertisements, auctions) = futures::join!(
        list_articles(api),
        list_ads(api),
        list_advertisements(api),
        list_auctions(api),
    );
    let failures = [
        articles.as_ref().err(),
        ads.as_ref().err(),
        advertisements.as_ref().err(),
        auctions.as_ref().err(),
    ];
    if let Some(err) = failures.iter().flatten().find(|err| err.is_unauthorized()) {
        return Err((*err).clone());
    }
    for err in failures.iter().flatten() {
        log::error!("Dashboard counter failed: {}", err);
    }
    Ok(DashboardStats {
        articles: articles.as_ref().ok().map(Vec::len),
        breaking: articles.as_ref().ok().map(|items| count_breaking(items)),
        active_ads: ads.as_ref().ok().map(|items| count_active(items)),
        advertisements: advertisements.as_ref().ok().map(Vec::len),
        auctions: auctions.as_ref().ok().map(Vec::len),
    })
}
