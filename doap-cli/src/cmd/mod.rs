pub mod eval;
pub mod interpolate;
pub mod render;
pub mod roles;
pub mod validate;

use std::collections::BTreeMap;
use std::path::Path;

use doap_core::{parse_project_str, parse_settings_str, DocumentFormat, Project, Settings};

use crate::exit_codes;
use crate::output::print_error;
use crate::{OutputArgs, ProjectArgs};

/// Read a file, reporting failures as runtime errors.
pub fn read_file(path: &Path, output: &OutputArgs) -> Result<String, i32> {
    std::fs::read_to_string(path).map_err(|e| {
        print_error(
            output.format,
            output.quiet,
            &format!("failed to read {}: {e}", path.display()),
        );
        exit_codes::RUNTIME_ERROR
    })
}

pub fn load_project(path: &Path, output: &OutputArgs) -> Result<Project, i32> {
    let content = read_file(path, output)?;
    parse_project_str(&content, DocumentFormat::Auto)
        .map(|parsed| parsed.document)
        .map_err(|e| {
            print_error(
                output.format,
                output.quiet,
                &format!("{}: {e}", path.display()),
            );
            exit_codes::NOT_RESOLVED
        })
}

pub fn load_settings(path: Option<&Path>, output: &OutputArgs) -> Result<Option<Settings>, i32> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = read_file(path, output)?;
    parse_settings_str(&content, DocumentFormat::Auto)
        .map(|parsed| Some(parsed.document))
        .map_err(|e| {
            print_error(
                output.format,
                output.quiet,
                &format!("{}: {e}", path.display()),
            );
            exit_codes::NOT_RESOLVED
        })
}

/// Project and optional settings named by `args`.
pub fn load_inputs(
    args: &ProjectArgs,
    output: &OutputArgs,
) -> Result<(Project, Option<Settings>), i32> {
    let project = load_project(&args.project, output)?;
    let settings = load_settings(args.settings.as_deref(), output)?;
    Ok((project, settings))
}

/// `KEY=VALUE` pairs; entries without `=` are rejected.
pub fn parse_set_properties(
    set_properties: &[String],
    output: &OutputArgs,
) -> Result<BTreeMap<String, String>, i32> {
    let mut properties = BTreeMap::new();
    for s in set_properties {
        let Some((k, v)) = s.split_once('=') else {
            print_error(
                output.format,
                output.quiet,
                &format!("expected KEY=VALUE, got '{s}'"),
            );
            return Err(exit_codes::NOT_RESOLVED);
        };
        properties.insert(k.to_string(), v.to_string());
    }
    Ok(properties)
}
