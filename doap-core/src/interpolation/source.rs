use std::collections::BTreeMap;

use crate::expressions::{EvalError, Navigable, Navigator};

/// Something a placeholder expression can be looked up in.
pub trait ValueSource {
    /// `Ok(None)` when this source has nothing for `expression`.
    fn value(&self, expression: &str) -> Result<Option<String>, EvalError>;

    fn describe(&self) -> String;
}

/// Environment variables, addressed as `env.NAME`.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: BTreeMap<String, String>,
}

impl EnvSource {
    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_vars(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

impl ValueSource for EnvSource {
    fn value(&self, expression: &str) -> Result<Option<String>, EvalError> {
        Ok(expression
            .strip_prefix("env.")
            .and_then(|name| self.vars.get(name))
            .cloned())
    }

    fn describe(&self) -> String {
        "environment".to_string()
    }
}

/// Flat key/value properties, looked up by the whole expression.
#[derive(Debug, Clone)]
pub struct PropertiesSource<'a> {
    name: &'static str,
    properties: &'a BTreeMap<String, String>,
}

impl<'a> PropertiesSource<'a> {
    pub fn new(name: &'static str, properties: &'a BTreeMap<String, String>) -> Self {
        Self { name, properties }
    }
}

impl ValueSource for PropertiesSource<'_> {
    fn value(&self, expression: &str) -> Result<Option<String>, EvalError> {
        Ok(self.properties.get(expression).cloned())
    }

    fn describe(&self) -> String {
        format!("{} properties", self.name)
    }
}

/// An object root reachable under one or more alias prefixes (`project.name`).
pub struct PrefixedObjectSource<'a> {
    prefixes: Vec<String>,
    root: &'a dyn Navigable,
    navigator: Navigator<'a>,
}

impl<'a> PrefixedObjectSource<'a> {
    pub fn new<I, S>(prefixes: I, root: &'a dyn Navigable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            root,
            navigator: Navigator::new(),
        }
    }

    pub fn with_navigator(mut self, navigator: Navigator<'a>) -> Self {
        self.navigator = navigator;
        self
    }
}

impl ValueSource for PrefixedObjectSource<'_> {
    fn value(&self, expression: &str) -> Result<Option<String>, EvalError> {
        for prefix in &self.prefixes {
            let Some(rest) = expression
                .strip_prefix(prefix.as_str())
                .and_then(|r| r.strip_prefix('.'))
            else {
                continue;
            };
            let resolved = self.navigator.evaluate_str(rest, self.root)?;
            return Ok(resolved.map(|v| v.to_string()));
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.root.shape().name(), self.prefixes.join(", "))
    }
}

/// An object root addressed without an alias. With `trim_root_token`, the first
/// token of the expression is dropped, so `anything.name` reads `name`.
pub struct ObjectSource<'a> {
    root: &'a dyn Navigable,
    trim_root_token: bool,
    navigator: Navigator<'a>,
}

impl<'a> ObjectSource<'a> {
    pub fn new(root: &'a dyn Navigable) -> Self {
        Self {
            root,
            trim_root_token: false,
            navigator: Navigator::new(),
        }
    }

    pub fn trimming_root_token(root: &'a dyn Navigable) -> Self {
        Self {
            trim_root_token: true,
            ..Self::new(root)
        }
    }

    pub fn with_navigator(mut self, navigator: Navigator<'a>) -> Self {
        self.navigator = navigator;
        self
    }
}

impl ValueSource for ObjectSource<'_> {
    fn value(&self, expression: &str) -> Result<Option<String>, EvalError> {
        let expression = if self.trim_root_token {
            expression
                .split_once('.')
                .map_or(expression, |(_, rest)| rest)
        } else {
            expression
        };
        let resolved = self.navigator.evaluate_str(expression, self.root)?;
        Ok(resolved.map(|v| v.to_string()))
    }

    fn describe(&self) -> String {
        self.root.shape().name().to_string()
    }
}
