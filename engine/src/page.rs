//! The document abstraction the engine works against.
//!
//! The engine never touches browser APIs. `traduce-web` implements these
//! traits over the live DOM; tests implement them in memory.

use crate::config::LangCode;

/// One node annotated with a translation key.
pub trait PageNode {
    /// Dotted path into the bundle, read from the key attribute.
    fn key(&self) -> String;

    /// Whether the raw-markup flag attribute is exactly the string `"true"`.
    fn wants_markup(&self) -> bool;

    /// Inject the value as plain rendered text.
    fn set_text(&self, value: &str);

    /// Inject the value as unescaped markup.
    ///
    /// Deliberate trust boundary: bundles are developer-shipped assets and
    /// are injected without sanitization. Never route user input here.
    fn set_markup(&self, value: &str);
}

/// The page being translated. Every hook is optional on the concrete
/// page; a document without annotations, switcher or loading marker is a
/// no-op, not an error.
pub trait Page {
    type Node: PageNode;

    /// Every node currently carrying the translation-key annotation.
    fn annotated_nodes(&self) -> Vec<Self::Node>;

    /// Set the document-level language attribute.
    fn set_document_language(&self, lang: &LangCode);

    /// Mirror the active language in the switcher control, if present.
    fn sync_switcher(&self, lang: &LangCode);

    /// Clear the hidden/loading marker so content becomes visible.
    ///
    /// Called exactly once per load cycle whatever the outcome; must be
    /// idempotent.
    fn reveal(&self);
}
