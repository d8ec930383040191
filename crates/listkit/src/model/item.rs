//! Item records.
//!
//! An [`Item`] is an open-ended mapping from field name to value. Fields keep
//! their insertion order. The list state reserves two boolean fields on every
//! item (selection and filter match) whose names come from
//! [`ListOptions`](super::ListOptions).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::value::is_truthy;
use crate::error::{ListError, Result};

/// One entry of a list: field names mapped to dynamic values.
///
/// # Example
///
/// ```
/// use listkit::model::Item;
///
/// let user = Item::new().with("id", 1).with("name", "Alice");
/// assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Creates an item with no fields.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style field assignment.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets a field, returning its previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Removes a field, returning its value. Remaining fields keep their order.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.shift_remove(field)
    }

    /// Returns `true` if the field is present (even when null).
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the item has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(field, value)` pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Reads a field as a flag using value truthiness. Missing fields are `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(is_truthy)
    }

    /// Stores a boolean flag.
    pub fn set_flag(&mut self, field: &str, on: bool) {
        self.0.insert(field.to_string(), Value::Bool(on));
    }

    /// Shallow-merges `changes` into this item; fields in `changes` win.
    pub fn merge(&mut self, changes: &Item) {
        for (field, value) in changes.fields() {
            self.0.insert(field.clone(), value.clone());
        }
    }

    /// Returns a copy of this item with `changes` merged in.
    pub fn merged(&self, changes: &Item) -> Item {
        let mut item = self.clone();
        item.merge(changes);
        item
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the item, returning the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Object(item.0)
    }
}

impl TryFrom<Value> for Item {
    type Error = ListError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ListError::not_a_record(0, &other)),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Item {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Converts a sequence of JSON values into list input.
///
/// `null` entries become `None` (and are dropped later by normalization);
/// any other non-record entry is an error naming its position.
pub fn items_from_values(values: Vec<Value>) -> Result<Vec<Option<Item>>> {
    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| match value {
            Value::Null => Ok(None),
            Value::Object(map) => Ok(Some(Item(map))),
            other => Err(ListError::not_a_record(position, &other)),
        })
        .collect()
}

/// Parses a JSON array into list input. See [`items_from_values`].
pub fn items_from_json(json: &str) -> Result<Vec<Option<Item>>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    items_from_values(values)
}
