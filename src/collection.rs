//! In-memory Postman collection
//!
//! The document is kept as an order-preserving JSON tree. Only `variable`,
//! `item` and item `name` are interpreted; everything else passes through
//! untouched on save.

use crate::error::{PatchError, Result};
use crate::models::{Folder, Variable};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    root: Map<String, Value>,
}

impl Collection {
    /// Wraps a parsed document. The root must be a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Collection { root }),
            other => Err(PatchError::InvalidStructure(format!(
                "collection root must be an object, found {}",
                kind(&other)
            ))),
        }
    }

    /// Top-level fields in document order
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn name(&self) -> Option<&str> {
        self.root
            .get("info")
            .and_then(|info| info.get("name"))
            .and_then(Value::as_str)
    }

    fn variables(&self) -> Result<&[Value]> {
        match self.root.get("variable") {
            None => Ok(&[]),
            Some(Value::Array(vars)) => Ok(vars.as_slice()),
            Some(other) => Err(invalid_field("variable", other)),
        }
    }

    /// Creates an empty `variable` array when the document has none
    fn variables_mut(&mut self) -> Result<&mut Vec<Value>> {
        let entry = self
            .root
            .entry("variable")
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(vars) => Ok(vars),
            other => Err(invalid_field("variable", other)),
        }
    }

    fn items(&self) -> Result<&[Value]> {
        match self.root.get("item") {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(invalid_field("item", other)),
            None => Err(PatchError::InvalidStructure(String::from(
                "collection has no \"item\" array",
            ))),
        }
    }

    fn items_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self.root.get_mut("item") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(invalid_field("item", other)),
            None => Err(PatchError::InvalidStructure(String::from(
                "collection has no \"item\" array",
            ))),
        }
    }

    /// Keys of the collection variables, in document order
    pub fn variable_keys(&self) -> Result<Vec<&str>> {
        Ok(self
            .variables()?
            .iter()
            .filter_map(|v| v.get("key").and_then(Value::as_str))
            .collect())
    }

    /// Names of the top-level items, in document order. Unnamed items are skipped.
    pub fn item_names(&self) -> Result<Vec<&str>> {
        Ok(self.items()?.iter().filter_map(item_name).collect())
    }

    pub fn item_count(&self) -> Result<usize> {
        Ok(self.items()?.len())
    }

    /// Appends each candidate whose key is not already present. Existing
    /// entries are never overwritten. Returns the keys actually added.
    pub fn merge_variables(&mut self, candidates: &[Variable]) -> Result<Vec<String>> {
        let vars = self.variables_mut()?;
        let mut added = Vec::new();

        for candidate in candidates {
            let exists = vars
                .iter()
                .any(|v| v.get("key").and_then(Value::as_str) == Some(candidate.key.as_str()));
            if exists {
                continue;
            }
            let value = serde_json::to_value(candidate).map_err(PatchError::Serialize)?;
            vars.push(value);
            added.push(candidate.key.clone());
        }

        Ok(added)
    }

    /// Index of the first top-level item called `name`
    pub fn find_item(&self, name: &str) -> Result<Option<usize>> {
        Ok(self
            .items()?
            .iter()
            .position(|item| item_name(item) == Some(name)))
    }

    pub fn anchor_index(&self, name: &str) -> Result<usize> {
        self.find_item(name)?
            .ok_or_else(|| PatchError::AnchorNotFound(name.to_string()))
    }

    pub fn has_folder(&self, name: &str) -> Result<bool> {
        Ok(self.find_item(name)?.is_some())
    }

    /// Inserts `folders` at consecutive positions starting at `index`,
    /// shifting the item currently there and everything after it.
    pub fn insert_before(&mut self, index: usize, folders: &[Folder]) -> Result<()> {
        let values = folders
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(PatchError::Serialize)?;

        let items = self.items_mut()?;
        if index > items.len() {
            return Err(PatchError::InvalidStructure(format!(
                "insertion index {} is past the end of {} items",
                index,
                items.len()
            )));
        }
        items.splice(index..index, values);
        Ok(())
    }
}

fn item_name(item: &Value) -> Option<&str> {
    item.get("name").and_then(Value::as_str)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid_field(field: &str, value: &Value) -> PatchError {
    PatchError::InvalidStructure(format!(
        "\"{}\" must be an array, found {}",
        field,
        kind(value)
    ))
}
