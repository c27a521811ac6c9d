//! Dotted path expressions (`project.developers[0].name`) evaluated over navigable
//! object graphs.

mod cache;
mod navigator;
mod path;
mod value;

pub use cache::{AccessorCache, AccessorTable, CacheConfig, CacheStats};
pub use navigator::{evaluate, EvalError, Navigator};
pub use path::{parse_path, Path, Segment};
pub use value::{DynamicShape, FieldSpec, InvokeError, Method, Navigable, Shape, Value};
