use super::{
    client::ApiClient,
    types::{ApiError, Auction, AuctionQuery, Bid, BidRequest},
};

impl ApiClient {
    pub async fn list_auctions(&self, query: &AuctionQuery) -> Result<Vec<Auction>, ApiError> {
        let url = self
            .url(&format!("/auctions{}", query.to_query_string()))
            .await;
        self.fetch_list(self.http_client().get(&url), &["auctions"])
            .await
    }

    pub async fn get_auction(&self, id: i64) -> Result<Auction, ApiError> {
        let url = self.url(&format!("/auctions/{}", id)).await;
        self.fetch_item(self.http_client().get(&url), &["auction"])
            .await
    }

    pub async fn auction_bids(&self, id: i64) -> Result<Vec<Bid>, ApiError> {
        let url = self.url(&format!("/auctions/{}/bids", id)).await;
        self.fetch_list(self.http_client().get(&url), &["bids"])
            .await
    }

    pub async fn place_bid(&self, id: i64, amount: f64) -> Result<(), ApiError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ApiError::validation("Bid amount must be greater than zero"));
        }
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/auctions/{}/bid", id)).await;
        self.send_unit(
            self.http_client()
                .post(&url)
                .headers(headers)
                .json(&BidRequest { amount }),
        )
        .await
    }

    pub async fn delete_auction(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let url = self.url(&format!("/auctions/{}", id)).await;
        self.send_unit(self.http_client().delete(&url).headers(headers))
            .await
    }
}
