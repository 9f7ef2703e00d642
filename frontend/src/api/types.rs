use leptos::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(alias = "account")]
    pub user: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Editor,
    User,
    Other(String),
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "superadmin",
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::User => "user",
            Role::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "superadmin" | "super_admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "editor" => Role::Editor,
            "user" => Role::User,
            _ => Role::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub email: String,
    #[serde(default, alias = "name", alias = "displayName")]
    pub display_name: Option<String>,
    pub role: Role,
}

impl Account {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CategoryRefWire")]
pub struct CategoryRef {
    pub name: String,
    pub name_rw: Option<String>,
    pub slug: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRefWire {
    Name(String),
    Detailed {
        #[serde(default)]
        name: String,
        #[serde(default, alias = "nameRw")]
        name_rw: Option<String>,
        #[serde(default)]
        slug: Option<String>,
    },
}

impl From<CategoryRefWire> for CategoryRef {
    fn from(wire: CategoryRefWire) -> Self {
        match wire {
            CategoryRefWire::Name(name) => Self {
                name,
                name_rw: None,
                slug: None,
            },
            CategoryRefWire::Detailed {
                name,
                name_rw,
                slug,
            } => Self {
                name,
                name_rw,
                slug,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthorWire {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
    },
}

impl AuthorWire {
    fn into_name(self) -> Option<String> {
        match self {
            AuthorWire::Name(name) => Some(name),
            AuthorWire::Detailed { name } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArticleWire")]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<CategoryRef>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub views: u64,
    pub read_time: Option<String>,
    pub is_breaking: bool,
    pub is_featured: bool,
}

// Both spellings of a field are decoded side by side and merged in `From`,
// so a payload carrying `isBreaking` and `is_breaking` together still parses.
#[derive(Deserialize)]
struct ArticleWire {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, rename = "imageUrl")]
    image_url_camel: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<CategoryRef>,
    #[serde(default)]
    author: Option<AuthorWire>,
    #[serde(default, alias = "publishedAt")]
    published_at: Option<String>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "wire::count")]
    views: u64,
    #[serde(default, alias = "readTime")]
    read_time: Option<String>,
    #[serde(default, deserialize_with = "wire::flag")]
    is_breaking: Option<bool>,
    #[serde(default, rename = "isBreaking", deserialize_with = "wire::flag")]
    is_breaking_camel: Option<bool>,
    #[serde(default, deserialize_with = "wire::flag")]
    is_featured: Option<bool>,
    #[serde(default, rename = "isFeatured", deserialize_with = "wire::flag")]
    is_featured_camel: Option<bool>,
    #[serde(default, deserialize_with = "wire::flag")]
    featured: Option<bool>,
}

impl From<ArticleWire> for Article {
    fn from(wire: ArticleWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            slug: wire.slug,
            excerpt: wire.excerpt,
            content: wire.content,
            image_url: wire.image_url.or(wire.image_url_camel).or(wire.image),
            category: wire.category,
            author: wire.author.and_then(AuthorWire::into_name),
            published_at: wire.published_at.or(wire.created_at),
            views: wire.views,
            read_time: wire.read_time,
            is_breaking: wire
                .is_breaking
                .or(wire.is_breaking_camel)
                .unwrap_or(false),
            is_featured: wire
                .is_featured
                .or(wire.is_featured_camel)
                .or(wire.featured)
                .unwrap_or(false),
        }
    }
}

/// Job/classified advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AdvertisementWire")]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    pub company: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub views: u64,
    pub deadline: Option<String>,
    pub is_featured: bool,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub contact: ContactInfo,
    pub created_at: Option<String>,
}

/// How to reach the advertiser. Flat `contact_*` fields win over the nested
/// `contact` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none() && self.website.is_none() && self.address.is_none()
    }

    /// Website as a clickable URL; bare hosts get `https://`.
    pub fn website_href(&self) -> Option<String> {
        let site = self.website.as_deref()?.trim();
        if site.is_empty() {
            None
        } else if site.starts_with("http://") || site.starts_with("https://") {
            Some(site.to_string())
        } else {
            Some(format!("https://{}", site))
        }
    }
}

#[derive(Deserialize)]
struct AdvertisementWire {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    category: Option<CategoryRef>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "full_description", rename = "fullDescription")]
    full_description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, rename = "imageUrl")]
    image_url_camel: Option<String>,
    #[serde(default, deserialize_with = "wire::count")]
    views: u64,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default, deserialize_with = "wire::flag")]
    is_featured: Option<bool>,
    #[serde(default, rename = "isFeatured", deserialize_with = "wire::flag")]
    is_featured_camel: Option<bool>,
    #[serde(default, deserialize_with = "wire::flag")]
    featured: Option<bool>,
    #[serde(default, deserialize_with = "wire::line_list")]
    requirements: Vec<String>,
    #[serde(default, deserialize_with = "wire::line_list")]
    benefits: Vec<String>,
    #[serde(default)]
    contact: Option<ContactInfo>,
    #[serde(default, alias = "contactPhone")]
    contact_phone: Option<String>,
    #[serde(default, alias = "contactEmail")]
    contact_email: Option<String>,
    #[serde(default, alias = "contactWebsite")]
    contact_website: Option<String>,
    #[serde(default, alias = "contactAddress")]
    contact_address: Option<String>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
}

impl From<AdvertisementWire> for Advertisement {
    fn from(wire: AdvertisementWire) -> Self {
        let nested = wire.contact.unwrap_or_default();
        Self {
            id: wire.id,
            title: wire.title,
            company: wire.company,
            category: wire.category.map(|c| c.name).filter(|c| !c.is_empty()),
            location: wire.location,
            description: wire.full_description.or(wire.description),
            image_url: wire.image_url.or(wire.image_url_camel),
            views: wire.views,
            deadline: wire.deadline,
            is_featured: wire
                .is_featured
                .or(wire.is_featured_camel)
                .or(wire.featured)
                .unwrap_or(false),
            requirements: wire.requirements,
            benefits: wire.benefits,
            contact: ContactInfo {
                phone: wire.contact_phone.or(nested.phone),
                email: wire.contact_email.or(nested.email),
                website: wire.contact_website.or(nested.website),
                address: wire.contact_address.or(nested.address),
            },
            created_at: wire.created_at,
        }
    }
}

/// Banner ad slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AdWire")]
pub struct Ad {
    pub id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
}

#[derive(Deserialize)]
struct AdWire {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, rename = "imageUrl")]
    image_url_camel: Option<String>,
    #[serde(default, alias = "linkUrl", alias = "link")]
    link_url: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default, deserialize_with = "wire::flag")]
    is_active: Option<bool>,
    #[serde(default, rename = "isActive", deserialize_with = "wire::flag")]
    is_active_camel: Option<bool>,
    #[serde(default, deserialize_with = "wire::flag")]
    active: Option<bool>,
}

impl From<AdWire> for Ad {
    fn from(wire: AdWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            image_url: wire.image_url.or(wire.image_url_camel),
            link_url: wire.link_url,
            position: wire.position,
            is_active: wire
                .is_active
                .or(wire.is_active_camel)
                .or(wire.active)
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AuctionWire")]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub current_bid: Option<f64>,
    pub starting_bid: Option<f64>,
    pub status: Option<String>,
    pub images: Vec<String>,
    pub end_time: Option<String>,
    pub category: Option<String>,
}

impl Auction {
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("active")
    }

    /// Lowest acceptable next bid.
    pub fn minimum_bid(&self) -> f64 {
        self.current_bid
            .filter(|v| *v > 0.0)
            .or(self.starting_bid)
            .unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct AuctionWire {
    #[serde(deserialize_with = "wire::id")]
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "full_description", rename = "fullDescription")]
    full_description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default, deserialize_with = "wire::number")]
    current_bid: Option<f64>,
    #[serde(default, rename = "currentBid", deserialize_with = "wire::number")]
    current_bid_camel: Option<f64>,
    #[serde(default, deserialize_with = "wire::number")]
    starting_bid: Option<f64>,
    #[serde(default, rename = "startingBid", deserialize_with = "wire::number")]
    starting_bid_camel: Option<f64>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, deserialize_with = "wire::string_list")]
    images: Vec<String>,
    #[serde(default, alias = "image_url", rename = "imageUrl")]
    image_url: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
    #[serde(default, rename = "endTime")]
    end_time_camel: Option<String>,
    #[serde(default)]
    category: Option<CategoryRef>,
}

impl From<AuctionWire> for Auction {
    fn from(wire: AuctionWire) -> Self {
        let mut images = wire.images;
        if images.is_empty() {
            images.extend(wire.image_url.filter(|url| !url.trim().is_empty()));
        }
        Self {
            id: wire.id,
            title: wire.title,
            description: wire.full_description.or(wire.description),
            location: wire.location,
            current_bid: wire.current_bid.or(wire.current_bid_camel),
            starting_bid: wire.starting_bid.or(wire.starting_bid_camel),
            status: wire.status,
            images,
            end_time: wire.end_time.or(wire.end_time_camel),
            category: wire.category.map(|c| c.name).filter(|c| !c.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "wire::number")]
    pub amount: Option<f64>,
    #[serde(default, alias = "bidderName", alias = "bidder")]
    pub bidder_name: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "wire::id")]
    pub id: i64,
    pub name: String,
    #[serde(default, alias = "nameRw")]
    pub name_rw: Option<String>,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleBreakingRequest {
    pub is_breaking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

fn query_string(params: Vec<(&str, String)>) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode(&value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

fn flag_param(value: bool) -> String {
    let raw = if value { "1" } else { "0" };
    raw.to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub breaking: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<String>,
}

impl ArticleQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(breaking) = self.breaking {
            params.push(("breaking", flag_param(breaking)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            params.push(("offset", offset.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        query_string(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvertisementQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
}

impl AdvertisementQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        query_string(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuctionQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl AuctionQuery {
    pub fn active(limit: u32) -> Self {
        Self {
            status: Some("active".into()),
            category: None,
            limit: Some(limit),
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(status) = &self.status {
            params.push(("status", status.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        query_string(params)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdQuery {
    pub position: Option<String>,
    pub active: Option<bool>,
    pub limit: Option<u32>,
}

impl AdQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(position) = &self.position {
            params.push(("position", position.clone()));
        }
        if let Some(active) = self.active {
            params.push(("active", flag_param(active)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        query_string(params)
    }
}

pub fn search_query_string(query: &str, limit: u32) -> String {
    query_string(vec![("q", query.trim().to_string()), ("limit", limit.to_string())])
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const CODE_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl From<crate::utils::storage::StorageError> for ApiError {
    fn from(error: crate::utils::storage::StorageError) -> Self {
        ApiError::unknown(error.to_string())
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNKNOWN)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_REQUEST_FAILED)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_UNAUTHORIZED)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_FORBIDDEN)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, CODE_NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == CODE_UNAUTHORIZED
    }

    pub fn is_forbidden(&self) -> bool {
        self.code == CODE_FORBIDDEN
    }

    pub fn is_not_found(&self) -> bool {
        self.code == CODE_NOT_FOUND
    }

    /// Builds an error from a non-2xx response. The backend reports failures
    /// as `{error}` or `{message}`; anything else falls back to the status.
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|b| b.get("error").or_else(|| b.get("message")))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed: {}", status));
        let code = match status {
            400 | 422 => CODE_VALIDATION,
            401 => CODE_UNAUTHORIZED,
            403 => CODE_FORBIDDEN,
            404 => CODE_NOT_FOUND,
            _ => CODE_UNKNOWN,
        };
        Self {
            error: message,
            code: code.to_string(),
            details: body.and_then(|b| b.get("details").or_else(|| b.get("errors"))).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_login_request_uses_email() {
        let req = LoginRequest {
            email: "ed@news.rw".into(),
            password: "secret".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["email"], json!("ed@news.rw"));
        assert_eq!(v["password"], json!("secret"));
    }

    #[wasm_bindgen_test]
    fn roles_parse_case_insensitively() {
        assert_eq!(Role::from("Admin".to_string()), Role::Admin);
        assert_eq!(Role::from("superadmin".to_string()), Role::SuperAdmin);
        assert_eq!(Role::from("editor".to_string()), Role::Editor);
        assert_eq!(
            Role::from("moderator".to_string()),
            Role::Other("moderator".into())
        );
        assert!(Role::Admin.is_admin());
        assert!(Role::SuperAdmin.is_admin());
        assert!(!Role::Editor.is_admin());
        assert!(!Role::Other("root".into()).is_admin());
    }

    #[wasm_bindgen_test]
    fn account_round_trips_through_storage_shape() {
        let raw = json!({"id": 3, "email": "a@b.c", "name": "Aline", "role": "superadmin"});
        let account: Account = serde_json::from_value(raw).unwrap();
        assert_eq!(account.display_name.as_deref(), Some("Aline"));
        assert_eq!(account.role, Role::SuperAdmin);

        let stored = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&stored).unwrap();
        assert_eq!(back, account);
        assert_eq!(back.label(), "Aline");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("x").code, CODE_VALIDATION);
        assert_eq!(ApiError::unknown("x").code, CODE_UNKNOWN);
        assert_eq!(ApiError::request_failed("x").code, CODE_REQUEST_FAILED);
        assert!(ApiError::unauthorized("x").is_unauthorized());
        assert!(ApiError::forbidden("x").is_forbidden());
        assert_eq!(ApiError::not_found("x").code, CODE_NOT_FOUND);
        assert!(ApiError::not_found("x").is_not_found());
        assert!(!ApiError::request_failed("x").is_not_found());
        assert!(ApiError::from_status(404, None).is_not_found());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn from_status_reads_error_or_message() {
        let err = ApiError::from_status(401, Some(&json!({"error": "Token expired"})));
        assert!(err.is_unauthorized());
        assert_eq!(err.error, "Token expired");

        let err = ApiError::from_status(422, Some(&json!({"message": "Invalid", "errors": ["a"]})));
        assert_eq!(err.code, CODE_VALIDATION);
        assert_eq!(err.details, Some(json!(["a"])));

        let err = ApiError::from_status(500, None);
        assert_eq!(err.error, "Request failed: 500");
        assert_eq!(err.code, CODE_UNKNOWN);
    }

    #[test]
    fn article_merges_alternate_field_names() {
        let camel: Article = serde_json::from_value(json!({
            "id": 1,
            "title": "Breaking",
            "imageUrl": "/uploads/a.jpg",
            "isBreaking": true,
            "isFeatured": 1,
            "publishedAt": "2025-03-05T10:00:00Z",
            "readTime": "4 min",
            "category": {"name": "Politics", "nameRw": "Politiki", "slug": "politics"},
            "author": {"name": "Admin"}
        }))
        .unwrap();
        let snake: Article = serde_json::from_value(json!({
            "id": "1",
            "title": "Breaking",
            "image_url": "/uploads/a.jpg",
            "is_breaking": 1,
            "featured": true,
            "created_at": "2025-03-05T10:00:00Z",
            "read_time": "4 min",
            "category": "Politics",
            "author": "Admin"
        }))
        .unwrap();
        for article in [&camel, &snake] {
            assert_eq!(article.id, 1);
            assert!(article.is_breaking);
            assert!(article.is_featured);
            assert_eq!(article.image_url.as_deref(), Some("/uploads/a.jpg"));
            assert_eq!(article.author.as_deref(), Some("Admin"));
            assert_eq!(article.published_at.as_deref(), Some("2025-03-05T10:00:00Z"));
            assert_eq!(article.category.as_ref().map(|c| c.name.as_str()), Some("Politics"));
        }
        assert_eq!(
            camel.category.as_ref().and_then(|c| c.name_rw.as_deref()),
            Some("Politiki")
        );
    }

    #[test]
    fn article_tolerates_both_breaking_spellings_at_once() {
        let article: Article = serde_json::from_value(json!({
            "id": 9,
            "is_breaking": 0,
            "isBreaking": true
        }))
        .unwrap();
        assert!(!article.is_breaking);
        assert!(!article.is_featured);
        assert_eq!(article.views, 0);
    }

    #[test]
    fn ad_active_flag_accepts_every_spelling() {
        for raw in [
            json!({"id": 1, "is_active": true}),
            json!({"id": 1, "isActive": 1}),
            json!({"id": 1, "active": "1"}),
        ] {
            let ad: Ad = serde_json::from_value(raw).unwrap();
            assert!(ad.is_active);
        }
        let ad: Ad = serde_json::from_value(json!({"id": 2, "link": "https://x"})).unwrap();
        assert!(!ad.is_active);
        assert_eq!(ad.link_url.as_deref(), Some("https://x"));
    }

    #[test]
    fn auction_normalizes_bids_and_images() {
        let auction: Auction = serde_json::from_value(json!({
            "id": 5,
            "title": "Land plot",
            "fullDescription": "Near Kigali",
            "current_bid": "25000.00",
            "startingBid": 10000,
            "images": "/uploads/1.jpg, /uploads/2.jpg",
            "endTime": "2025-06-01T00:00:00Z",
            "category": "Land"
        }))
        .unwrap();
        assert_eq!(auction.current_bid, Some(25000.0));
        assert_eq!(auction.starting_bid, Some(10000.0));
        assert_eq!(auction.images, vec!["/uploads/1.jpg", "/uploads/2.jpg"]);
        assert_eq!(auction.description.as_deref(), Some("Near Kigali"));
        assert_eq!(auction.end_time.as_deref(), Some("2025-06-01T00:00:00Z"));
        assert_eq!(auction.category.as_deref(), Some("Land"));
        assert_eq!(auction.status_label(), "active");
        assert_eq!(auction.minimum_bid(), 25000.0);

        let single: Auction =
            serde_json::from_value(json!({"id": 6, "imageUrl": "/uploads/x.jpg", "starting_bid": 500}))
                .unwrap();
        assert_eq!(single.images, vec!["/uploads/x.jpg"]);
        assert_eq!(single.minimum_bid(), 500.0);
    }

    #[test]
    fn advertisement_prefers_full_description() {
        let ad: Advertisement = serde_json::from_value(json!({
            "id": 3,
            "title": "Accountant",
            "description": "short",
            "fullDescription": "long form",
            "category": {"name": "Finance"},
            "views": 12
        }))
        .unwrap();
        assert_eq!(ad.description.as_deref(), Some("long form"));
        assert_eq!(ad.category.as_deref(), Some("Finance"));
        assert_eq!(ad.views, 12);
    }

    #[test]
    fn advertisement_reads_contact_and_lists_in_either_shape() {
        let ad: Advertisement = serde_json::from_value(json!({
            "id": 4,
            "title": "Nurses wanted",
            "requirements": "Diploma in nursing\nTwo years experience\n",
            "benefits": ["Health cover", "Training"],
            "contact": {"phone": "+250 788 000 111", "email": "jobs@moh.gov.rw", "website": "www.moh.gov.rw"},
            "contactEmail": "hr@moh.gov.rw",
            "createdAt": "2025-10-23"
        }))
        .unwrap();
        assert_eq!(ad.requirements, vec!["Diploma in nursing", "Two years experience"]);
        assert_eq!(ad.benefits, vec!["Health cover", "Training"]);
        assert_eq!(ad.contact.phone.as_deref(), Some("+250 788 000 111"));
        assert_eq!(ad.contact.email.as_deref(), Some("hr@moh.gov.rw"));
        assert_eq!(ad.contact.website_href().as_deref(), Some("https://www.moh.gov.rw"));
        assert_eq!(ad.created_at.as_deref(), Some("2025-10-23"));

        let bare: Advertisement = serde_json::from_value(json!({"id": 5, "title": "Driver"})).unwrap();
        assert!(bare.contact.is_empty());
        assert!(bare.requirements.is_empty());
    }

    #[test]
    fn queries_encode_parameters() {
        assert_eq!(ArticleQuery::default().to_query_string(), "");
        let query = ArticleQuery {
            category: Some("politics".into()),
            breaking: Some(true),
            limit: Some(10),
            offset: Some(0),
            sort: None,
        };
        assert_eq!(query.to_query_string(), "?category=politics&breaking=1&limit=10");
        assert_eq!(
            AuctionQuery::active(10).to_query_string(),
            "?status=active&limit=10"
        );
        assert_eq!(
            AdQuery {
                position: Some("sidebar".into()),
                active: Some(false),
                limit: None
            }
            .to_query_string(),
            "?position=sidebar&active=0"
        );
        assert_eq!(search_query_string(" amakuru mashya ", 20), "?q=amakuru%20mashya&limit=20");
    }
}
