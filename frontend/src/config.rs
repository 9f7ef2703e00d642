use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    // Optional global object, e.g. window.__NEWSPORTAL_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
        .filter(|v| !v.trim().is_empty())
}

fn snapshot_from_globals() -> Option<String> {
    read_global_key("__NEWSPORTAL_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__NEWSPORTAL_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (&cfg.api_base_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__NEWSPORTAL_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once: env.js global, then window config, then
/// `./config.json`, then the local development default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            log::info!("API base URL loaded from config.json");
            return cache_base_url(&url);
        }
    }
    log::warn!("No runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

/// Synchronous view of the resolved base URL for render paths (image URLs).
/// Falls back to the default until `init` has completed.
pub fn cached_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
