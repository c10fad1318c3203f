use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Descriptive record for one recommendation model, as published by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
    pub author: String,
}

/// Available models keyed by model key
///
/// Entries keep the order in which the backend listed them, so the first entry
/// is the one a fresh page pre-selects.
pub type ModelCatalog = IndexMap<String, ModelInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> ModelInfo {
        ModelInfo {
            name: name.to_string(),
            description: format!("{} description", name),
            author: "Kyle".to_string(),
        }
    }

    #[test]
    fn test_deserialization_keeps_document_order() {
        let json = r#"{
            "sbert": {"name": "SBERT", "description": "d1", "author": "Brayan"},
            "kyle": {"name": "Kyle", "description": "d2", "author": "Kyle"},
            "eugene": {"name": "Eugene", "description": "d3", "author": "Eugene"}
        }"#;

        let catalog: ModelCatalog = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sbert", "kyle", "eugene"]);
        assert_eq!(catalog.get("kyle").unwrap().author, "Kyle");
    }

    #[test]
    fn test_empty_catalog_has_no_first_key() {
        let catalog: ModelCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.first().is_none());
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut catalog = ModelCatalog::new();
        catalog.insert("a".to_string(), info("A"));
        catalog.insert("b".to_string(), info("B"));
        catalog.insert("a".to_string(), info("A2"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first().map(|(key, _)| key.as_str()), Some("a"));
        assert_eq!(catalog["a"].name, "A2");
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let result: Result<ModelCatalog, _> = serde_json::from_str(r#"["kyle"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_object_in_order() {
        let catalog: ModelCatalog = vec![("b".to_string(), info("B")), ("a".to_string(), info("A"))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with(r#"{"b":"#));
        assert!(json.find(r#""a":"#).unwrap() > json.find(r#""b":"#).unwrap());
    }
}
