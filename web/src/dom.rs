//! web-sys implementation of the engine's page abstraction.

use engine::{LangCode, Page, PageNode};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlSelectElement};

/// Attribute carrying the dotted translation key.
pub const KEY_ATTR: &str = "data-i18n";
/// Flag attribute; the exact string "true" switches injection to markup.
pub const HTML_ATTR: &str = "data-i18n-html";
/// Selector for the optional language switcher control.
pub const SWITCHER_SELECTOR: &str = "select[data-i18n-switcher]";
/// Body class hiding content until the first load cycle settles.
pub const LOADING_CLASS: &str = "i18n-loading";

/// The live document.
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn attach() -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        Ok(Self { document })
    }

    /// The switcher control, if the page carries one.
    pub fn switcher(&self) -> Option<HtmlSelectElement> {
        self.document
            .query_selector(SWITCHER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    }
}

/// One annotated element.
pub struct WebNode(Element);

impl PageNode for WebNode {
    fn key(&self) -> String {
        self.0.get_attribute(KEY_ATTR).unwrap_or_default()
    }

    fn wants_markup(&self) -> bool {
        self.0.get_attribute(HTML_ATTR).as_deref() == Some("true")
    }

    fn set_text(&self, value: &str) {
        self.0.set_text_content(Some(value));
    }

    fn set_markup(&self, value: &str) {
        self.0.set_inner_html(value);
    }
}

impl Page for WebPage {
    type Node = WebNode;

    fn annotated_nodes(&self) -> Vec<WebNode> {
        let mut nodes = Vec::new();
        let Ok(list) = self.document.query_selector_all(&format!("[{KEY_ATTR}]")) else {
            return nodes;
        };
        for index in 0..list.length() {
            let Some(node) = list.get(index) else {
                continue;
            };
            if let Ok(element) = node.dyn_into::<Element>() {
                nodes.push(WebNode(element));
            }
        }
        nodes
    }

    fn set_document_language(&self, lang: &LangCode) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", lang.as_str());
        }
    }

    fn sync_switcher(&self, lang: &LangCode) {
        if let Some(select) = self.switcher() {
            select.set_value(lang.as_str());
        }
    }

    fn reveal(&self) {
        // class removal is idempotent, so repeated load cycles are safe
        if let Some(body) = self.document.body() {
            let _ = body.class_list().remove_1(LOADING_CLASS);
        }
    }
}
