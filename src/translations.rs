use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDetail {
    pub name: String,
    pub intro: String,
    pub links: String,
}

/// Namespace -> value -> detail lookup built from `translations.json`.
///
/// The document is expected to look like
/// `{"data": [{"namespace": "...", "data": {"<value>": {"name", "intro", "links"}}}]}`.
/// Anything that does not fit that shape is left out of the index instead of
/// failing the load. When several entries share a namespace only the first one
/// is consulted.
#[derive(Debug, Clone, Default)]
pub struct TranslationIndex {
    namespaces: HashMap<String, Map<String, Value>>,
}

impl TranslationIndex {
    pub fn from_document(document: &Value) -> Self {
        let mut namespaces = HashMap::new();
        let entries = document
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for entry in entries {
            let Some(namespace) = entry.get("namespace").and_then(Value::as_str) else {
                continue;
            };
            let values = entry
                .get("data")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            namespaces.entry(namespace.to_string()).or_insert(values);
        }

        Self { namespaces }
    }

    pub fn lookup(&self, namespace: &str, value: &str) -> Option<TagDetail> {
        let detail = self.namespaces.get(namespace)?.get(value)?.as_object()?;
        Some(TagDetail {
            name: text_field(detail, "name"),
            intro: text_field(detail, "intro"),
            links: text_field(detail, "links"),
        })
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }
}

fn text_field(detail: &Map<String, Value>, key: &str) -> String {
    detail
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TranslationIndex {
        TranslationIndex::from_document(&json!({
            "head": { "sha": "ignored" },
            "data": [
                {
                    "namespace": "artist",
                    "data": {
                        "jane": { "name": "简", "intro": "an artist", "links": "https://example.org" },
                        "partial": { "name": "只有名字" },
                        "odd": { "name": 12, "intro": null, "links": ["x"] }
                    }
                },
                { "namespace": "artist", "data": { "late": { "name": "ignored" } } },
                { "namespace": "female", "data": "not a map" },
                { "data": { "orphan": { "name": "no namespace" } } },
                "garbage"
            ]
        }))
    }

    #[test]
    fn lookup_returns_all_fields() {
        let detail = sample().lookup("artist", "jane").unwrap();
        assert_eq!(detail.name, "简");
        assert_eq!(detail.intro, "an artist");
        assert_eq!(detail.links, "https://example.org");
    }

    #[test]
    fn missing_and_non_string_fields_become_empty() {
        let index = sample();
        let partial = index.lookup("artist", "partial").unwrap();
        assert_eq!(partial.intro, "");
        assert_eq!(partial.links, "");

        assert_eq!(index.lookup("artist", "odd").unwrap(), TagDetail::default());
    }

    #[test]
    fn first_entry_for_a_namespace_wins() {
        assert!(sample().lookup("artist", "late").is_none());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let index = sample();
        assert_eq!(index.namespace_count(), 2);
        assert!(index.lookup("female", "anything").is_none());
        assert!(index.lookup("parody", "anything").is_none());
    }

    #[test]
    fn unexpected_document_shape_gives_empty_index() {
        for document in [json!(null), json!([1, 2]), json!({ "data": { "artist": {} } })] {
            let index = TranslationIndex::from_document(&document);
            assert_eq!(index.namespace_count(), 0);
            assert!(index.lookup("artist", "jane").is_none());
        }
    }
}
