//! The distribution config as fetched from CloudFront, kept as raw JSON.
//!
//! Only the origin and cache-behavior lists are ever touched. Everything else stays exactly as
//! it came back from the API, in its original key order, so resubmitting the document can
//! never revert settings this tool does not know about.

use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("distribution config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected `{0}` in distribution config")]
    Missing(&'static str),
    #[error("expected `{path}` to be {expected}")]
    WrongType { path: &'static str, expected: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionConfigDocument {
    root: Map<String, Value>,
}

fn items<'a>(list: &'a Map<String, Value>, path: &'static str) -> Result<&'a Vec<Value>, DocumentError> {
    match list.get("Items") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(DocumentError::WrongType { path, expected: "a list" }),
        None => Err(DocumentError::Missing(path)),
    }
}

fn items_mut<'a>(list: &'a mut Map<String, Value>, path: &'static str) -> Result<&'a mut Vec<Value>, DocumentError> {
    match list.get_mut("Items") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(DocumentError::WrongType { path, expected: "a list" }),
        None => Err(DocumentError::Missing(path)),
    }
}

/// Append `entry` and bring `Quantity` back in line with the list length.
fn push_counted(list: &mut Map<String, Value>, path: &'static str, entry: Value) -> Result<(), DocumentError> {
    let items = items_mut(list, path)?;
    items.push(entry);
    let quantity = items.len();
    list.insert(String::from("Quantity"), Value::from(quantity));
    Ok(())
}

impl DistributionConfigDocument {
    pub fn from_json(s: &str) -> Result<Self, DocumentError> {
        match serde_json::from_str::<Value>(s)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::WrongType {
                path:     "DistributionConfig",
                expected: "an object",
            }),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    fn section(&self, key: &'static str) -> Result<&Map<String, Value>, DocumentError> {
        match self.root.get(key) {
            Some(Value::Object(section)) => Ok(section),
            Some(_) => Err(DocumentError::WrongType {
                path:     key,
                expected: "an object",
            }),
            None => Err(DocumentError::Missing(key)),
        }
    }

    fn section_mut(&mut self, key: &'static str) -> Result<&mut Map<String, Value>, DocumentError> {
        match self.root.get_mut(key) {
            Some(Value::Object(section)) => Ok(section),
            Some(_) => Err(DocumentError::WrongType {
                path:     key,
                expected: "an object",
            }),
            None => Err(DocumentError::Missing(key)),
        }
    }

    pub fn origins(&self) -> Result<&Vec<Value>, DocumentError> {
        items(self.section("Origins")?, "Origins.Items")
    }

    pub fn has_origin(&self, id: &str) -> Result<bool, DocumentError> {
        Ok(self
            .origins()?
            .iter()
            .any(|origin| origin.get("Id").and_then(Value::as_str) == Some(id)))
    }

    pub fn push_origin(&mut self, origin: &impl Serialize) -> Result<(), DocumentError> {
        let entry = serde_json::to_value(origin)?;
        push_counted(self.section_mut("Origins")?, "Origins.Items", entry)
    }

    /// Make sure `CacheBehaviors` and its `Items` list exist. Existing content is left alone.
    pub fn ensure_cache_behaviors(&mut self) -> Result<(), DocumentError> {
        let section = self
            .root
            .entry("CacheBehaviors")
            .or_insert_with(|| json!({ "Quantity": 0, "Items": [] }));

        let Value::Object(section) = section else {
            return Err(DocumentError::WrongType {
                path:     "CacheBehaviors",
                expected: "an object",
            });
        };

        section.entry("Items").or_insert_with(|| Value::Array(Vec::new()));
        Ok(())
    }

    pub fn cache_behaviors(&self) -> Result<&Vec<Value>, DocumentError> {
        items(self.section("CacheBehaviors")?, "CacheBehaviors.Items")
    }

    /// First behavior whose `PathPattern` matches exactly. Later duplicates are never looked at.
    pub fn cache_behavior_mut(&mut self, path_pattern: &str) -> Result<Option<&mut Map<String, Value>>, DocumentError> {
        let behaviors = items_mut(self.section_mut("CacheBehaviors")?, "CacheBehaviors.Items")?;
        Ok(behaviors
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|behavior| behavior.get("PathPattern").and_then(Value::as_str) == Some(path_pattern)))
    }

    pub fn push_cache_behavior(&mut self, behavior: &impl Serialize) -> Result<(), DocumentError> {
        let entry = serde_json::to_value(behavior)?;
        push_counted(self.section_mut("CacheBehaviors")?, "CacheBehaviors.Items", entry)
    }
}
