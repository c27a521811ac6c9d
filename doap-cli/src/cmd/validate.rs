use std::path::Path;

use doap_core::validate_doap;
use serde::Serialize;

use super::read_file;
use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::OutputArgs;

#[derive(Serialize)]
struct ValidateResult {
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub fn validate_cmd(path: &Path, output: OutputArgs) -> i32 {
    let content = match read_file(path, &output) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let errors = validate_doap(&content);
    let valid = errors.is_empty();

    if output.format == OutputFormat::Text && !output.quiet {
        if valid {
            println!("ok: valid DOAP document");
        } else {
            eprintln!("error: {} is not a valid DOAP document", path.display());
            for e in &errors {
                eprintln!("- {e}");
            }
        }
    } else {
        print_result(output.format, output.quiet, &ValidateResult { valid, errors });
    }

    if valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_RESOLVED
    }
}
