//! Source loading with fallback.
//!
//! `load` never fails: any retrieval or parse problem is logged and the
//! built-in fallback list is returned instead.

use fauxdict_types::{SourceList, SourceOrigin};
use serde_json::Value;

use crate::{Error, Result};

/// Retrieves the raw payload body from wherever the words live.
pub trait SourceFetcher {
    /// Human-readable location used in logs and in `SourceOrigin`
    fn location(&self) -> String;

    fn fetch(&self) -> Result<String>;
}

/// Parse `{ "<list_field>": ["...", ...] }` into its strings.
///
/// Any element that is not a string makes the whole payload malformed.
pub fn parse_payload(body: &str, list_field: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body)?;

    let object = value
        .as_object()
        .ok_or_else(|| Error::Malformed("expected a JSON object".to_string()))?;

    let list = object
        .get(list_field)
        .ok_or_else(|| Error::Malformed(format!("missing field '{}'", list_field)))?
        .as_array()
        .ok_or_else(|| Error::Malformed(format!("field '{}' is not an array", list_field)))?;

    let items = list
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                Error::Malformed(format!("element {} of '{}' is not a string", i, list_field))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if items.is_empty() {
        return Err(Error::EmptyPayload);
    }

    Ok(items)
}

/// Load the source list, substituting the fallback on any failure.
pub fn load(fetcher: &dyn SourceFetcher, list_field: &str) -> SourceList {
    let location = fetcher.location();

    let parsed = fetcher
        .fetch()
        .and_then(|body| parse_payload(&body, list_field));

    match parsed {
        Ok(items) => {
            let count = items.len();
            let origin = SourceOrigin::Payload {
                location: location.clone(),
            };
            match SourceList::new(items, origin) {
                Some(list) => {
                    tracing::info!(%location, count, "loaded source list");
                    list
                }
                None => SourceList::fallback(Error::EmptyPayload.to_string()),
            }
        }
        Err(err) => {
            tracing::warn!(%location, error = %err, "using fallback entries");
            SourceList::fallback(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticFetcher(std::result::Result<&'static str, &'static str>);

    impl SourceFetcher for StaticFetcher {
        fn location(&self) -> String {
            "memory".to_string()
        }

        fn fetch(&self) -> Result<String> {
            self.0
                .map(str::to_string)
                .map_err(|msg| Error::Fetch(msg.to_string()))
        }
    }

    #[test]
    fn test_parse_payload_reads_named_field() {
        let items = parse_payload(r#"{"words": ["a", "b"], "extra": 1}"#, "words").unwrap();
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_parse_payload_rejects_non_string_elements() {
        let err = parse_payload(r#"{"words": ["a", 2]}"#, "words").unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
        assert!(err.to_string().contains("element 1"));
    }

    #[test]
    fn test_parse_payload_rejects_wrong_field() {
        let err = parse_payload(r#"{"terms": ["a"]}"#, "words").unwrap_err();
        assert!(err.to_string().contains("missing field 'words'"));
    }

    #[test]
    fn test_load_uses_payload_when_valid() {
        let fetcher = StaticFetcher(Ok(r#"{"words": ["only"]}"#));
        let list = load(&fetcher, "words");
        assert_eq!(list.items(), &["only".to_string()]);
        assert_eq!(
            list.origin(),
            &SourceOrigin::Payload {
                location: "memory".to_string()
            }
        );
    }

    #[test]
    fn test_load_falls_back_on_fetch_error() {
        let fetcher = StaticFetcher(Err("connection refused"));
        let list = load(&fetcher, "words");
        assert_eq!(list.len(), 10);
        match list.origin() {
            SourceOrigin::Fallback { reason } => assert!(reason.contains("connection refused")),
            other => panic!("expected fallback, got {:?}", other),
        }
    }
}
