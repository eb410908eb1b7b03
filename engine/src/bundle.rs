//! Locale bundles: schemaless JSON trees addressed by dotted keys.

use serde_json::Value;

/// Result of a dotted-path lookup.
///
/// `Empty` and `Missing` are handled the same way downstream (the node is
/// left untouched and a warning is logged), but they are kept distinct so
/// diagnostics and tests can tell "the path does not exist" apart from
/// "the path exists but carries nothing injectable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A non-empty string leaf.
    Text(&'a str),
    /// The path resolves, but to an empty string or a non-string value.
    Empty,
    /// Some segment of the path does not resolve.
    Missing,
}

/// One language's translations, as fetched. No schema validation: bundles
/// are arbitrary JSON trees and missing keys are tolerated at lookup time.
#[derive(Debug, Clone)]
pub struct Bundle {
    root: Value,
}

impl Bundle {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            root: serde_json::from_str(raw)?,
        })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Traverse `key` split on `.`, segment by segment.
    ///
    /// Traversal halts as soon as a segment fails to resolve (including
    /// descending into a non-object).
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut node = &self.root;
        for segment in key.split('.') {
            match node.get(segment) {
                Some(next) => node = next,
                None => return Lookup::Missing,
            }
        }
        match node {
            Value::String(s) if !s.is_empty() => Lookup::Text(s.as_str()),
            _ => Lookup::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle() -> Bundle {
        Bundle::from_value(json!({
            "hero": {
                "title": "Hi",
                "cta": "<b>Bold</b>",
                "blank": "",
                "count": 0
            },
            "footer": { "note": "bye" }
        }))
    }

    #[test]
    fn resolves_nested_paths() {
        assert_eq!(bundle().lookup("hero.title"), Lookup::Text("Hi"));
        assert_eq!(bundle().lookup("footer.note"), Lookup::Text("bye"));
    }

    #[test]
    fn unresolved_paths_are_missing() {
        assert_eq!(bundle().lookup("hero.subtitle"), Lookup::Missing);
        assert_eq!(bundle().lookup("nav.home"), Lookup::Missing);
        // descending through a leaf halts traversal
        assert_eq!(bundle().lookup("hero.title.deeper"), Lookup::Missing);
    }

    #[test]
    fn empty_and_non_string_leaves_are_empty() {
        assert_eq!(bundle().lookup("hero.blank"), Lookup::Empty);
        assert_eq!(bundle().lookup("hero.count"), Lookup::Empty);
        // an intermediate object is not injectable either
        assert_eq!(bundle().lookup("hero"), Lookup::Empty);
    }

    #[test]
    fn parse_failure_surfaces_as_error() {
        assert!(Bundle::from_json("{not json").is_err());
    }
}
