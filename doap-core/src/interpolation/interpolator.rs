use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::source::ValueSource;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(.+?)\}").expect("valid regex"));

/// A problem met while resolving one placeholder. Resolution continued with the
/// next source, or left the placeholder in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub expression: String,
    pub message: String,
}

/// Replaces `${expression}` placeholders using an ordered list of sources.
///
/// The first source with a value wins. Placeholders no source can resolve are kept
/// verbatim. Resolved values are interpolated again, so `${a}` may expand to text
/// containing `${b}`; a reference cycle leaves the placeholder unresolved.
#[derive(Default)]
pub struct Interpolator<'a> {
    sources: Vec<Box<dyn ValueSource + 'a>>,
    feedback: Vec<Feedback>,
}

impl<'a> Interpolator<'a> {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            feedback: Vec::new(),
        }
    }

    pub fn add_source(&mut self, source: impl ValueSource + 'a) -> &mut Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn with_source(mut self, source: impl ValueSource + 'a) -> Self {
        self.add_source(source);
        self
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn clear_feedback(&mut self) {
        self.feedback.clear();
    }

    pub fn interpolate(&mut self, template: &str) -> String {
        let mut stack = Vec::new();
        self.expand(template, &mut stack)
    }

    fn expand(&mut self, template: &str, stack: &mut Vec<String>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(template) {
            let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&template[last..whole.start()]);
            last = whole.end();

            match self.resolve(expr.as_str().trim(), stack) {
                Some(value) => out.push_str(&value),
                None => out.push_str(whole.as_str()),
            }
        }

        out.push_str(&template[last..]);
        out
    }

    fn resolve(&mut self, expression: &str, stack: &mut Vec<String>) -> Option<String> {
        if stack.iter().any(|e| e == expression) {
            let chain = stack.join(" -> ");
            self.report(expression, format!("reference cycle: {chain} -> {expression}"));
            return None;
        }

        let raw = self.lookup(expression)?;
        if !raw.contains("${") {
            return Some(raw);
        }

        stack.push(expression.to_string());
        let expanded = self.expand(&raw, stack);
        stack.pop();
        Some(expanded)
    }

    fn lookup(&mut self, expression: &str) -> Option<String> {
        for source in &self.sources {
            match source.value(expression) {
                Ok(Some(value)) => {
                    debug!(expression, source = %source.describe(), "resolved placeholder");
                    return Some(value);
                }
                Ok(None) => {}
                Err(err) => {
                    let message = format!(
                        "failed to extract '{expression}' from {}: {err}",
                        source.describe()
                    );
                    warn!("{message}");
                    self.feedback.push(Feedback {
                        expression: expression.to_string(),
                        message,
                    });
                }
            }
        }
        None
    }

    fn report(&mut self, expression: &str, message: String) {
        warn!("{message}");
        self.feedback.push(Feedback {
            expression: expression.to_string(),
            message,
        });
    }
}
