use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const FALLBACK_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub toast_duration_ms: Option<u32>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
// `None` once config.json was tried and is absent or unreadable.
static RUNTIME_CONFIG: OnceLock<Option<RuntimeConfig>> = OnceLock::new();

fn global_object(name: &str) -> Option<js_sys::Object> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|v| !v.is_empty())
    })
}

fn get_from_env_js() -> Option<String> {
    // window.__XCLONE_ENV = { API_BASE_URL: "..." }
    let obj = global_object("__XCLONE_ENV")?;
    read_string(&obj, &["API_BASE_URL", "api_base_url"])
}

fn get_from_window_config() -> Option<String> {
    // window.__XCLONE_CONFIG = { api_base_url: "..." }
    let obj = global_object("__XCLONE_CONFIG")?;
    read_string(&obj, &["api_base_url", "API_BASE_URL"])
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js().or_else(get_from_window_config)
}

fn same_origin_base_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    same_origin_api(&origin)
}

fn same_origin_api(origin: &str) -> Option<String> {
    let origin = origin.trim_end_matches('/');
    if origin.is_empty() || origin == "null" {
        None
    } else {
        Some(format!("{}/api", origin))
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
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
    let _ = js_sys::Reflect::set(&w, &"__XCLONE_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

async fn runtime_config() -> Option<RuntimeConfig> {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let fetched = fetch_runtime_config().await;
    if let Some(cfg) = &fetched {
        log::debug!("config.json loaded: {:?}", cfg);
    }
    RUNTIME_CONFIG.get_or_init(|| fetched).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        log::debug!("api base url from window globals: {}", existing);
        return cache_base_url(&existing);
    }
    if let Some(cfg) = runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            log::debug!("api base url from config.json: {}", url);
            return cache_base_url(&url);
        }
    }
    if let Some(url) = same_origin_base_url() {
        log::debug!("api base url from page origin: {}", url);
        return cache_base_url(&url);
    }
    log::warn!("no runtime config found, using {}", FALLBACK_API_BASE_URL);
    cache_base_url(FALLBACK_API_BASE_URL)
}

fn toast_duration_from(cfg: Option<&RuntimeConfig>) -> u32 {
    cfg.and_then(|cfg| cfg.toast_duration_ms)
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TOAST_DURATION_MS)
}

/// Auto-dismiss delay for toasts. Reads config.json once `init` has loaded it.
pub fn toast_duration_ms() -> u32 {
    toast_duration_from(RUNTIME_CONFIG.get().and_then(Option::as_ref))
}

/// Resolves the API base URL and loads config.json. The toast duration
/// only lives in config.json, so it is read even when window globals
/// already name the API.
pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = runtime_config().await;
}
