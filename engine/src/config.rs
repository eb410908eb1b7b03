//! Runtime configuration and validated language codes.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// A language code known to be in the configured supported set.
///
/// Instances only come out of [`Config::normalize`] / [`Config::normalize_tag`],
/// so holding a `LangCode` means the code is supported and already
/// lowercase. Raw user input never reaches storage or the DOM directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangCode(String);

impl LangCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable runtime configuration.
///
/// Built once at startup and passed by reference into the resolver and
/// loader; there is no module-global state.
#[derive(Debug, Clone)]
pub struct Config {
    default: String,
    supported: Vec<String>,
    storage_key: String,
    /// URL template for bundles; `{lang}` is replaced by the code.
    bundle_path: String,
}

impl Config {
    pub fn new(
        default: &str,
        supported: &[&str],
        storage_key: &str,
        bundle_path: &str,
    ) -> Self {
        let default = default.to_ascii_lowercase();
        let mut supported: Vec<String> = supported
            .iter()
            .map(|s| s.to_ascii_lowercase())
            .collect();
        if !supported.iter().any(|s| *s == default) {
            supported.push(default.clone());
        }
        Self {
            default,
            supported,
            storage_key: storage_key.to_string(),
            bundle_path: bundle_path.to_string(),
        }
    }

    /// The hardcoded fallback language.
    pub fn default_lang(&self) -> LangCode {
        LangCode(self.default.clone())
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.supported.iter().map(String::as_str)
    }

    /// URL of the bundle for `lang`, relative to the page.
    pub fn bundle_url(&self, lang: &LangCode) -> String {
        self.bundle_path.replace("{lang}", lang.as_str())
    }

    /// Validate a raw code (query parameter, stored preference).
    ///
    /// Case-insensitive exact match against the supported set; anything
    /// else is `None` and the caller falls through to its next signal.
    pub fn normalize(&self, raw: &str) -> Option<LangCode> {
        let raw = raw.trim().to_ascii_lowercase();
        self.supported
            .iter()
            .any(|s| *s == raw)
            .then(|| LangCode(raw))
    }

    /// Validate a full BCP 47 tag (browser-reported), matching on the
    /// primary language subtag only: `fr-CA` matches a supported `fr`.
    pub fn normalize_tag(&self, tag: &str) -> Option<LangCode> {
        let id: LanguageIdentifier = tag.trim().parse().ok()?;
        self.normalize(id.language.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(
            "en",
            &["en", "it", "fr", "es"],
            "traduce.lang",
            "locales/{lang}.json",
        )
    }
}
