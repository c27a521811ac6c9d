use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A type whose zero-argument accessors can be looked up and invoked by name.
///
/// `methods` is the discovery step: it lists every method the shape exposes, accessor
/// or not. The accessor cache turns that list into an [`AccessorTable`] once per
/// shape; `invoke` is then called with the method names the table selected.
///
/// [`AccessorTable`]: crate::expressions::AccessorTable
pub trait Navigable: fmt::Debug + Send + Sync {
    fn shape(&self) -> Shape;

    fn methods(&self) -> Vec<Method>;

    fn invoke(&self, method: &str) -> Result<Value<'_>, InvokeError>;

    /// Text used when the object itself ends up in interpolated output.
    fn display(&self) -> String {
        self.shape().name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: Cow<'static, str>,
    pub arity: usize,
}

impl Method {
    pub fn new(name: impl Into<Cow<'static, str>>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    pub fn getters(names: &[&'static str]) -> Vec<Method> {
        names.iter().map(|n| Method::new(*n, 0)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    #[error("no zero-argument method named '{0}'")]
    NoSuchMethod(String),
    #[error("{0}")]
    Failed(String),
}

/// Runtime shape of a navigable value.
///
/// Rust types are identified by their `TypeId`. Shapes assembled at runtime (records
/// loaded from configuration) are identified by their shared descriptor.
#[derive(Debug, Clone)]
pub enum Shape {
    Type { id: TypeId, name: &'static str },
    Dynamic(Arc<DynamicShape>),
}

impl Shape {
    pub fn of<T: 'static>() -> Self {
        let full = std::any::type_name::<T>();
        let name = full.rsplit("::").next().unwrap_or(full);
        Shape::Type {
            id: TypeId::of::<T>(),
            name,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Shape::Type { name, .. } => name,
            Shape::Dynamic(d) => &d.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub key: String,
    pub boolean: bool,
}

impl FieldSpec {
    /// Accessor name for this field: `getKey`, or `isKey` for boolean fields.
    pub fn method_name(&self) -> String {
        let prefix = if self.boolean { "is" } else { "get" };
        format!("{prefix}{}", capitalize(&self.key))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DynamicShape {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl DynamicShape {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            fields,
        })
    }
}

/// Value produced by an accessor. Borrows from the object graph it was read from.
#[derive(Debug, Clone)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    List(Vec<Value<'a>>),
    Object(&'a dyn Navigable),
}

impl<'a> Value<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a dyn Navigable> {
        match self {
            Value::Object(o) => Some(*o),
            _ => None,
        }
    }

    pub fn objects<T: Navigable>(items: &'a [T]) -> Self {
        Value::List(items.iter().map(|i| Value::Object(i)).collect())
    }

    pub fn strings(items: &'a [String]) -> Self {
        Value::List(items.iter().map(|s| Value::from(s.as_str())).collect())
    }

    pub fn object<T: Navigable>(item: Option<&'a T>) -> Self {
        match item {
            Some(i) => Value::Object(i),
            None => Value::Null,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => std::ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map(Value::from).unwrap_or(Value::Null)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(o) => f.write_str(&o.display()),
        }
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
