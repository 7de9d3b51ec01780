//! HTTP API Client
//!
//! Functions for communicating with the Tokenscope research proxy.

use gloo_net::http::Request;
use serde_json::Value;
use tokenscope_core::FetchError;

/// Local storage key overriding the proxy base URL
pub const API_URL_KEY: &str = "tokenscope_api_url";

/// Get the proxy base URL from local storage, if one was set
pub fn get_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let url = storage.get_item(API_URL_KEY).ok()??;
    // Normalize: remove trailing slash
    Some(url.trim_end_matches('/').to_string())
}

/// Resolve the research endpoint: the stored override, else the page origin
pub fn research_endpoint() -> Result<String, String> {
    let base = match get_api_base() {
        Some(base) => base,
        None => web_sys::window()
            .ok_or("no browser window")?
            .location()
            .origin()
            .map_err(|_| "page origin unavailable".to_string())?,
    };

    let parsed = url::Url::parse(&base).map_err(|e| format!("invalid API URL {:?}: {}", base, e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("unsupported API URL scheme: {}", parsed.scheme()));
    }

    Ok(format!("{}/api/research", base.trim_end_matches('/')))
}

/// Fetch the raw research payload for one token
pub async fn fetch_research(endpoint: &str, token: &str) -> Result<Value, FetchError> {
    let url = format!(
        "{}?token={}",
        endpoint,
        String::from(js_sys::encode_uri_component(token))
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_api_base(url: &str) {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .unwrap()
            .set_item(API_URL_KEY, url)
            .unwrap();
    }

    #[wasm_bindgen_test]
    fn test_stored_api_base_used_for_endpoint() {
        set_api_base("http://localhost:8083/");
        assert_eq!(get_api_base().as_deref(), Some("http://localhost:8083"));
        assert_eq!(
            research_endpoint().as_deref(),
            Ok("http://localhost:8083/api/research")
        );
    }

    #[wasm_bindgen_test]
    fn test_invalid_api_base_rejected() {
        set_api_base("not a url");
        assert!(research_endpoint().is_err());
        set_api_base("ftp://example.com");
        assert!(research_endpoint().is_err());
        set_api_base("http://localhost:8083");
    }
}
