use doap_core::interpolation::finish;
use doap_core::project_interpolator;
use serde::Serialize;

use super::{load_inputs, parse_set_properties};
use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, ProjectArgs};

#[derive(Serialize)]
struct InterpolateResult {
    template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

pub fn interpolate_cmd(
    template: &str,
    project: ProjectArgs,
    set_properties: &[String],
    output: OutputArgs,
) -> i32 {
    let (project, settings) = match load_inputs(&project, &output) {
        Ok(v) => v,
        Err(code) => return code,
    };
    let overrides = match parse_set_properties(set_properties, &output) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let mut interpolator = project_interpolator(&project, settings.as_ref(), Some(&overrides));
    let value = finish(&mut interpolator, template);
    let warnings: Vec<String> = interpolator
        .feedback()
        .iter()
        .map(|f| f.message.clone())
        .collect();

    let code = if value.is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_RESOLVED
    };

    if output.format == OutputFormat::Text && !output.quiet {
        match &value {
            Some(v) => println!("{v}"),
            None => eprintln!("unresolved: {template}"),
        }
    } else {
        let result = InterpolateResult {
            template: template.to_string(),
            value,
            warnings,
        };
        print_result(output.format, output.quiet, &result);
    }
    code
}
