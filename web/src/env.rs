//! Browser environment: query string, localStorage, navigator, URL.
//!
//! Every accessor here degrades to "no signal" instead of failing; the
//! resolver treats absent and malformed input the same way.

use engine::{Config, LangCode, Signals};
use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, Window};

/// Query parameter carrying the language override.
pub const QUERY_PARAM: &str = "lang";

/// Collect all resolution signals in one synchronous pass.
pub fn gather_signals(config: &Config) -> Signals {
    let Some(window) = web_sys::window() else {
        return Signals::default();
    };
    Signals {
        query: query_lang(&window),
        stored: stored_lang(&window, config),
        browser: browser_tags(&window),
    }
}

fn query_lang(window: &Window) -> Option<String> {
    let search = window.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(QUERY_PARAM)
}

fn stored_lang(window: &Window, config: &Config) -> Option<String> {
    let storage = window.local_storage().ok()??;
    storage.get_item(config.storage_key()).ok()?
}

fn browser_tags(window: &Window) -> Vec<String> {
    let navigator = window.navigator();
    let tags: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    if !tags.is_empty() {
        return tags;
    }
    // some engines expose only the single-language form
    navigator.language().into_iter().collect()
}

/// Persist an explicit selection. Only called with validated codes.
pub fn persist_choice(config: &Config, lang: &LangCode) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    let Some(storage) = storage else {
        return;
    };
    if storage.set_item(config.storage_key(), lang.as_str()).is_err() {
        log::warn!("could not persist language choice `{lang}`");
    }
}

/// Rewrite the `lang` query parameter of the current URL in place, so the
/// active state stays shareable. Uses history replacement; no navigation.
pub fn write_url_lang(lang: &LangCode) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };
    url.search_params().set(QUERY_PARAM, lang.as_str());

    let Ok(history) = window.history() else {
        return;
    };
    if history
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
        .is_err()
    {
        log::warn!("could not mirror `{lang}` into the URL");
    }
}
