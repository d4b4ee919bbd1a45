//! Action messages and the generic action-creator factory
//!
//! An [`Action`] is an immutable `{ type, ...payload }` record. Every action in the
//! catalog is built by an [`ActionCreator`]: a type string plus the declared payload
//! fields with their default values. Creators are `const`, so the catalog lives in
//! plain associated constants.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Action payload: field name → JSON value
pub type Payload = Map<String, Value>;

/// Default value of a declared payload field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Null,
    Bool(bool),
    Int(i64),
    Str(&'static str),
    EmptyArray,
    EmptyObject,
}

impl FieldDefault {
    pub fn to_value(self) -> Value {
        match self {
            FieldDefault::Null => Value::Null,
            FieldDefault::Bool(b) => Value::Bool(b),
            FieldDefault::Int(n) => Value::from(n),
            FieldDefault::Str(s) => Value::from(s),
            FieldDefault::EmptyArray => Value::Array(Vec::new()),
            FieldDefault::EmptyObject => Value::Object(Map::new()),
        }
    }
}

/// An immutable message flowing through the store
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    kind: &'static str,
    payload: Payload,
}

impl Action {
    /// The action's type string, e.g. `Event/FETCH_ALL`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    /// String field, treating `null` and non-strings as absent
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Object field, treating `null` and non-objects as an empty map
    pub fn object_field(&self, field: &str) -> Payload {
        match self.get(field) {
            Some(Value::Object(map)) => map.clone(),
            _ => Payload::new(),
        }
    }

    /// Field value, or `null` when absent
    pub fn value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or(Value::Null)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.payload.len() + 1))?;
        map.serialize_entry("type", self.kind)?;
        for (key, value) in &self.payload {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Typed action constructor: a type string and its declared fields with defaults
#[derive(Debug, Clone, Copy)]
pub struct ActionCreator {
    kind: &'static str,
    fields: &'static [(&'static str, FieldDefault)],
}

impl ActionCreator {
    pub const fn new(kind: &'static str, fields: &'static [(&'static str, FieldDefault)]) -> Self {
        ActionCreator { kind, fields }
    }

    /// Creator with no declared fields
    pub const fn bare(kind: &'static str) -> Self {
        ActionCreator { kind, fields: &[] }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn fields(&self) -> &'static [(&'static str, FieldDefault)] {
        self.fields
    }

    /// Build `{ type, ...defaults, ...partial }`.
    ///
    /// Extra fields in `partial` pass through unchanged. A creator without declared
    /// fields accepts no payload and always yields `{ type }`. A non-object `partial`
    /// contributes nothing.
    pub fn create(&self, partial: Value) -> Action {
        let mut payload = self.defaults();

        if self.fields.is_empty() {
            return Action { kind: self.kind, payload };
        }

        if let Value::Object(overrides) = partial {
            payload.extend(overrides.into_iter().filter(|(key, _)| key != "type"));
        }

        Action { kind: self.kind, payload }
    }

    /// Build the action with every declared field at its default
    pub fn empty(&self) -> Action {
        Action {
            kind: self.kind,
            payload: self.defaults(),
        }
    }

    fn defaults(&self) -> Payload {
        self.fields
            .iter()
            .map(|(name, default)| ((*name).to_string(), default.to_value()))
            .collect()
    }
}
