//! HTTP bundle source backed by the browser fetch API.

use async_trait::async_trait;
use engine::{Bundle, BundleSource, Config, LangCode, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetches `locales/<lang>.json` (per the config's template) relative to
/// the page. No retry and no language fallback; a failed fetch is only
/// corrected by the next trigger.
pub struct HttpBundleSource {
    config: Config,
}

impl HttpBundleSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BundleSource for HttpBundleSource {
    async fn fetch(&self, lang: &LangCode) -> Result<Bundle, LoadError> {
        let url = self.config.bundle_url(lang);
        let window = web_sys::window().ok_or_else(|| network(&url, "window unavailable"))?;

        let response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|err| network(&url, &describe(err)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| network(&url, "fetch did not yield a Response"))?;

        if !response.ok() {
            return Err(LoadError::Status {
                url,
                status: response.status(),
            });
        }

        let body = JsFuture::from(response.text().map_err(|err| network(&url, &describe(err)))?)
            .await
            .map_err(|err| network(&url, &describe(err)))?
            .as_string()
            .unwrap_or_default();

        Bundle::from_json(&body).map_err(|source| LoadError::Parse { url, source })
    }
}

fn network(url: &str, reason: &str) -> LoadError {
    LoadError::Network {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
