//! Bundle loading and the reveal guarantee.

use async_trait::async_trait;

use crate::apply::translate_page;
use crate::bundle::Bundle;
use crate::config::LangCode;
use crate::error::LoadError;
use crate::page::Page;

/// Where bundles come from. The web crate fetches `locales/<lang>.json`
/// over HTTP; tests serve from memory.
#[async_trait(?Send)]
pub trait BundleSource {
    async fn fetch(&self, lang: &LangCode) -> Result<Bundle, LoadError>;
}

/// Load the bundle for `lang` and apply it to `page`.
///
/// On success: substitutes annotated nodes, sets the document language
/// attribute, and syncs the switcher's displayed value. On failure: logs
/// the error and leaves whatever was rendered before in place — no retry,
/// no fallback to another language.
///
/// In both arms the loading marker is cleared exactly once before
/// returning, so content never stays hidden behind a failed fetch.
/// Returns whether a bundle was applied.
pub async fn load_language<S, P>(source: &S, page: &P, lang: &LangCode) -> bool
where
    S: BundleSource,
    P: Page,
{
    let applied = match source.fetch(lang).await {
        Ok(bundle) => {
            translate_page(page, &bundle);
            page.set_document_language(lang);
            page.sync_switcher(lang);
            true
        }
        Err(err) => {
            log::error!("could not load `{lang}` bundle: {err}");
            false
        }
    };
    page.reveal();
    applied
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::page::PageNode;

    struct FakeSource {
        bundle: Option<Bundle>,
        status: u16,
    }

    #[async_trait(?Send)]
    impl BundleSource for FakeSource {
        async fn fetch(&self, lang: &LangCode) -> Result<Bundle, LoadError> {
            match &self.bundle {
                Some(bundle) => Ok(bundle.clone()),
                None => Err(LoadError::Status {
                    url: format!("locales/{lang}.json"),
                    status: self.status,
                }),
            }
        }
    }

    struct NoNodes;

    impl PageNode for NoNodes {
        fn key(&self) -> String {
            unreachable!()
        }
        fn wants_markup(&self) -> bool {
            unreachable!()
        }
        fn set_text(&self, _: &str) {}
        fn set_markup(&self, _: &str) {}
    }

    #[derive(Default)]
    struct RecordingPage {
        reveals: Cell<u32>,
        doc_lang: RefCell<Option<String>>,
        switcher: RefCell<Option<String>>,
    }

    impl Page for RecordingPage {
        type Node = NoNodes;
        fn annotated_nodes(&self) -> Vec<NoNodes> {
            Vec::new()
        }
        fn set_document_language(&self, lang: &LangCode) {
            *self.doc_lang.borrow_mut() = Some(lang.as_str().to_string());
        }
        fn sync_switcher(&self, lang: &LangCode) {
            *self.switcher.borrow_mut() = Some(lang.as_str().to_string());
        }
        fn reveal(&self) {
            self.reveals.set(self.reveals.get() + 1);
        }
    }

    fn it() -> LangCode {
        crate::Config::default().normalize("it").unwrap()
    }

    #[test]
    fn success_applies_and_reveals_once() {
        let source = FakeSource {
            bundle: Some(Bundle::from_value(json!({}))),
            status: 200,
        };
        let page = RecordingPage::default();
        let applied = block_on(load_language(&source, &page, &it()));
        assert!(applied);
        assert_eq!(page.reveals.get(), 1);
        assert_eq!(page.doc_lang.borrow().as_deref(), Some("it"));
        assert_eq!(page.switcher.borrow().as_deref(), Some("it"));
    }

    #[test]
    fn http_404_still_reveals_exactly_once() {
        let source = FakeSource {
            bundle: None,
            status: 404,
        };
        let page = RecordingPage::default();
        let applied = block_on(load_language(&source, &page, &it()));
        assert!(!applied);
        assert_eq!(page.reveals.get(), 1);
        // nothing was applied on the failure path
        assert!(page.doc_lang.borrow().is_none());
        assert!(page.switcher.borrow().is_none());
    }
}
