use super::cache::AccessorCache;
use super::path::{parse_path, Path};
use super::value::{InvokeError, Navigable, Value};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("failed to invoke '{method}' on {shape}: {source}")]
    Invoke {
        shape: String,
        method: String,
        #[source]
        source: InvokeError,
    },
    #[error("index {index} is out of range for '{segment}' ({len} elements)")]
    IndexOutOfRange {
        segment: String,
        index: usize,
        len: usize,
    },
}

/// Walks parsed paths against an object graph, resolving accessors through a cache.
#[derive(Clone, Copy)]
pub struct Navigator<'c> {
    cache: &'c AccessorCache,
}

impl Default for Navigator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator<'static> {
    pub fn new() -> Self {
        Self {
            cache: AccessorCache::global(),
        }
    }
}

impl<'c> Navigator<'c> {
    pub fn with_cache(cache: &'c AccessorCache) -> Self {
        Self { cache }
    }

    /// Resolve `path` starting at `root`.
    ///
    /// `Ok(None)` means there is no data at the path: an accessor is missing or a value
    /// along the way is null. Accessor failures and out-of-range indexes are errors.
    pub fn evaluate<'a>(
        &self,
        path: &Path,
        root: &'a dyn Navigable,
    ) -> Result<Option<Value<'a>>, EvalError> {
        let mut current = Value::Object(root);

        for segment in path.segments() {
            let target = match current {
                Value::Object(obj) => obj,
                // Null, scalars and bare lists have no accessors.
                _ => return Ok(None),
            };

            let table = self.cache.table_for(target);
            let Some(method) = table.resolve(&segment.name) else {
                return Ok(None);
            };

            let next = target.invoke(method).map_err(|source| EvalError::Invoke {
                shape: table.shape_name().to_string(),
                method: method.to_string(),
                source,
            })?;
            if next.is_null() {
                return Ok(None);
            }

            current = match (segment.index, next) {
                (Some(index), Value::List(mut items)) => {
                    if index >= items.len() {
                        return Err(EvalError::IndexOutOfRange {
                            segment: segment.name.clone(),
                            index,
                            len: items.len(),
                        });
                    }
                    items.swap_remove(index)
                }
                (_, next) => next,
            };

            if current.is_null() {
                return Ok(None);
            }
        }

        Ok(Some(current))
    }

    pub fn evaluate_str<'a>(
        &self,
        expression: &str,
        root: &'a dyn Navigable,
    ) -> Result<Option<Value<'a>>, EvalError> {
        self.evaluate(&parse_path(expression), root)
    }
}

/// Evaluate `expression` against `root` with the process-wide accessor cache.
pub fn evaluate<'a>(
    expression: &str,
    root: &'a dyn Navigable,
) -> Result<Option<Value<'a>>, EvalError> {
    Navigator::new().evaluate_str(expression, root)
}
