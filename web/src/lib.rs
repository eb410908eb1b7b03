//! Browser entry point and event wiring for Traduce.
//!
//! The module initializes when the wasm bundle loads: it resolves the
//! visitor's language (query parameter, stored preference, browser
//! languages, default), fetches `locales/<lang>.json`, substitutes every
//! `data-i18n` node, and lifts the `i18n-loading` class off `<body>` so
//! the page becomes visible exactly once whatever happened.
//!
//! A `<select data-i18n-switcher>` control, when the page has one, drives
//! re-translation: each change persists the choice to localStorage,
//! mirrors it into the `lang` query parameter via `history.replaceState`
//! (shareable URLs, no navigation), and spawns a fresh load in place.
//! Overlapping loads are not serialized; the last one to complete wins.

mod dom;
mod env;
mod fetch;

use engine::{load_language, resolve, Config};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;

use crate::dom::WebPage;
use crate::fetch::HttpBundleSource;

fn config() -> Config {
    // Defaults match the shipped assets under static/locales/.
    Config::default()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config();
    let page = WebPage::attach()?;

    wire_switcher(&page, config.clone())?;

    let signals = env::gather_signals(&config);
    let lang = resolve(&config, &signals);
    let source = HttpBundleSource::new(config);

    spawn_local(async move {
        load_language(&source, &page, &lang).await;
    });

    Ok(())
}

/// Attach the change listener to the switcher control, if the page has
/// one. The listener lives for the lifetime of the page, so the closure
/// is leaked on purpose.
fn wire_switcher(page: &WebPage, config: Config) -> Result<(), JsValue> {
    let Some(select) = page.switcher() else {
        return Ok(());
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<HtmlSelectElement>() else {
            return;
        };
        // Only validated codes ever reach storage, the URL, or the DOM.
        let Some(lang) = config.normalize(&select.value()) else {
            log::warn!("switcher offered unsupported language `{}`", select.value());
            return;
        };

        env::persist_choice(&config, &lang);
        env::write_url_lang(&lang);

        let Ok(page) = WebPage::attach() else {
            return;
        };
        let source = HttpBundleSource::new(config.clone());
        // In-place update: content is not re-hidden while the new bundle
        // is in flight.
        spawn_local(async move {
            load_language(&source, &page, &lang).await;
        });
    });

    select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
