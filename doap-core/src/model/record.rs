use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::expressions::{DynamicShape, FieldSpec, InvokeError, Method, Navigable, Shape, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<Field>),
    Record(Record),
}

impl Field {
    fn as_value(&self) -> Value<'_> {
        match self {
            Field::Null => Value::Null,
            Field::Bool(b) => Value::Bool(*b),
            Field::Int(n) => Value::Int(*n),
            Field::UInt(n) => Value::UInt(*n),
            Field::Float(n) => Value::Float(*n),
            Field::Str(s) => Value::from(s.as_str()),
            Field::List(items) => Value::List(items.iter().map(Field::as_value).collect()),
            Field::Record(r) => Value::Object(r),
        }
    }
}

/// A mapping-shaped value whose accessors come from its keys at runtime.
///
/// Every key `k` is exposed as `getK`, or `isK` when its value is a boolean.
#[derive(Debug, Clone)]
pub struct Record {
    shape: Arc<DynamicShape>,
    values: Vec<Field>,
}

impl Record {
    pub fn from_json(value: &JsonValue) -> Result<Self, RecordError> {
        RecordBuilder::new("Record").build(value)
    }

    pub fn shape_handle(&self) -> &Arc<DynamicShape> {
        &self.shape
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.shape
            .fields
            .iter()
            .position(|f| f.key == key)
            .and_then(|i| self.values.get(i))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.shape.fields == other.shape.fields && self.values == other.values
    }
}

impl Navigable for Record {
    fn shape(&self) -> Shape {
        Shape::Dynamic(self.shape.clone())
    }

    fn methods(&self) -> Vec<Method> {
        self.shape
            .fields
            .iter()
            .map(|f| Method::new(f.method_name(), 0))
            .collect()
    }

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError> {
        self.shape
            .fields
            .iter()
            .position(|f| f.method_name() == method)
            .and_then(|i| self.values.get(i))
            .map(Field::as_value)
            .ok_or_else(|| InvokeError::NoSuchMethod(method.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("a record must be built from a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Builds records from JSON-like documents, sharing one shape between mappings that
/// have the same keys.
#[derive(Debug)]
pub struct RecordBuilder {
    name: String,
    shapes: HashMap<Vec<FieldSpec>, Arc<DynamicShape>>,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: HashMap::new(),
        }
    }

    pub fn build(&mut self, value: &JsonValue) -> Result<Record, RecordError> {
        let JsonValue::Object(map) = value else {
            return Err(RecordError::NotAMapping(json_kind(value)));
        };
        Ok(self.build_map(map))
    }

    fn build_map(&mut self, map: &serde_json::Map<String, JsonValue>) -> Record {
        let mut specs = Vec::with_capacity(map.len());
        let mut values = Vec::with_capacity(map.len());
        for (key, v) in map {
            specs.push(FieldSpec {
                key: key.clone(),
                boolean: v.is_boolean(),
            });
            values.push(self.field(v));
        }

        let shape = self
            .shapes
            .entry(specs)
            .or_insert_with_key(|specs| DynamicShape::new(self.name.clone(), specs.clone()))
            .clone();

        Record { shape, values }
    }

    fn field(&mut self, value: &JsonValue) -> Field {
        match value {
            JsonValue::Null => Field::Null,
            JsonValue::Bool(b) => Field::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Field::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Field::UInt(u)
                } else {
                    Field::Float(n.as_f64().unwrap_or_default())
                }
            }
            JsonValue::String(s) => Field::Str(s.clone()),
            JsonValue::Array(items) => Field::List(items.iter().map(|i| self.field(i)).collect()),
            JsonValue::Object(map) => Field::Record(self.build_map(map)),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
