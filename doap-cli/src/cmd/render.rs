use std::path::Path;

use chrono::Utc;
use doap_core::{render_doap, RenderOptions};
use serde::Serialize;

use super::load_inputs;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{OutputArgs, ProjectArgs};

#[derive(Serialize)]
struct RenderResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
}

pub fn render_cmd(
    project: ProjectArgs,
    out: Option<&Path>,
    lang: &str,
    no_header: bool,
    output: OutputArgs,
) -> i32 {
    let (project, settings) = match load_inputs(&project, &output) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let options = RenderOptions {
        generated_at: Utc::now(),
        lang: lang.to_string(),
        header: !no_header,
    };
    let document = match render_doap(&project, settings.as_ref(), &options) {
        Ok(d) => d,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::EVALUATION_FAILED;
        }
    };

    if let Some(path) = out {
        if let Err(e) = std::fs::write(path, &document) {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to write {}: {e}", path.display()),
            );
            return exit_codes::RUNTIME_ERROR;
        }
        tracing::debug!(path = %path.display(), "wrote DOAP document");
        if output.format == OutputFormat::Text && !output.quiet {
            println!("ok: wrote {}", path.display());
        } else {
            print_result(
                output.format,
                output.quiet,
                &RenderResult {
                    path: Some(path.display().to_string()),
                    document: None,
                },
            );
        }
        return exit_codes::SUCCESS;
    }

    if output.format == OutputFormat::Text {
        // The document is the payload; --quiet only silences diagnostics.
        println!("{document}");
    } else {
        print_result(
            output.format,
            output.quiet,
            &RenderResult {
                path: None,
                document: Some(document),
            },
        );
    }
    exit_codes::SUCCESS
}
