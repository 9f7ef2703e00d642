pub const ARTICLE_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=500&fit=crop";
pub const AUCTION_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&h=600&fit=crop";

/// Strips the trailing `/api` segment so stored upload paths can be served
/// from the backend origin.
pub fn api_origin(api_base_url: &str) -> &str {
    let trimmed = api_base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed)
}

/// Turns whatever the backend stored for an image into a loadable URL.
pub fn resolve_image_url(raw: Option<&str>, api_base_url: &str, fallback: &str) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return fallback.to_string(),
    };
    if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with("data:") {
        return raw.to_string();
    }
    let origin = api_origin(api_base_url);
    if raw.starts_with('/') {
        format!("{}{}", origin, raw)
    } else {
        format!("{}/{}", origin, raw)
    }
}

/// First image of an auction gallery, resolved like any other upload.
pub fn first_image(images: &[String], api_base_url: &str) -> String {
    resolve_image_url(
        images.first().map(String::as_str),
        api_base_url,
        AUCTION_FALLBACK_IMAGE,
    )
}
