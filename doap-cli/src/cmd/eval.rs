use std::path::Path;

use doap_core::{parse_record_str, DocumentFormat, Navigable, Navigator, Value};
use serde::Serialize;

use super::{load_project, read_file};
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct EvalResult {
    expression: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<serde_json::Value>,
}

pub fn eval_cmd(
    expression: &str,
    project: Option<&Path>,
    document: Option<&Path>,
    output: OutputArgs,
) -> i32 {
    match (project, document) {
        (_, Some(path)) => {
            let content = match read_file(path, &output) {
                Ok(c) => c,
                Err(code) => return code,
            };
            match parse_record_str(&content, DocumentFormat::Auto) {
                Ok(parsed) => evaluate_and_print(expression, &parsed.document, &output),
                Err(e) => {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("{}: {e}", path.display()),
                    );
                    exit_codes::NOT_RESOLVED
                }
            }
        }
        (Some(path), None) => match load_project(path, &output) {
            Ok(project) => evaluate_and_print(expression, &project, &output),
            Err(code) => code,
        },
        (None, None) => {
            print_error(
                output.format,
                output.quiet,
                "either --project or --document is required",
            );
            exit_codes::NOT_RESOLVED
        }
    }
}

fn evaluate_and_print(expression: &str, root: &dyn Navigable, output: &OutputArgs) -> i32 {
    let value = match Navigator::new().evaluate_str(expression, root) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::EVALUATION_FAILED;
        }
    };

    let code = if value.is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_RESOLVED
    };

    if output.format == OutputFormat::Text && !output.quiet {
        match &value {
            Some(v) => println!("{v}"),
            None => eprintln!("not found: {expression}"),
        }
    } else {
        let result = EvalResult {
            expression: expression.to_string(),
            found: value.is_some(),
            value: value.as_ref().map(to_json),
        };
        print_result(output.format, output.quiet, &result);
    }
    code
}

fn to_json(value: &Value<'_>) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::from(*n),
        Value::UInt(n) => serde_json::Value::from(*n),
        Value::Float(n) => serde_json::Value::from(*n),
        Value::Str(s) => serde_json::Value::String(s.to_string()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(o) => serde_json::Value::String(o.display()),
    }
}
