//! Language resolution.

use crate::config::{Config, LangCode};

/// Environment signals consulted during resolution, gathered by the
/// platform layer before any async work starts.
#[derive(Debug, Clone, Default)]
pub struct Signals {
    /// Raw `lang` query parameter, if the URL carries one.
    pub query: Option<String>,
    /// Raw persisted preference, if one was ever written.
    pub stored: Option<String>,
    /// Browser-reported language tags, most preferred first.
    pub browser: Vec<String>,
}

/// Resolve the active language from `signals`.
///
/// Priority order (first match wins):
/// 1. Query-parameter override, if supported.
/// 2. Persisted preference, if supported.
/// 3. First browser tag whose primary subtag is supported.
/// 4. The configured default.
///
/// Malformed or absent input at any tier falls through to the next; this
/// function never fails and never returns an unsupported code. Pure:
/// reading the environment is the caller's job.
pub fn resolve(config: &Config, signals: &Signals) -> LangCode {
    if let Some(lang) = signals.query.as_deref().and_then(|q| config.normalize(q)) {
        return lang;
    }
    if let Some(lang) = signals.stored.as_deref().and_then(|s| config.normalize(s)) {
        return lang;
    }
    for tag in &signals.browser {
        if let Some(lang) = config.normalize_tag(tag) {
            return lang;
        }
    }
    config.default_lang()
}
