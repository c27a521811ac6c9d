use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a dotted path expression such as `licenses[0].name`.
    Eval {
        expression: String,
        /// Project metadata document to evaluate against.
        #[arg(long, conflicts_with = "document", required_unless_present = "document")]
        project: Option<PathBuf>,
        /// Any JSON/YAML mapping to evaluate against instead of a project.
        #[arg(long)]
        document: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Replace `${...}` placeholders in a template.
    Interpolate {
        template: String,
        #[command(flatten)]
        project: ProjectArgs,
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set_properties: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Group developers and contributors by DOAP role.
    Roles {
        #[command(flatten)]
        project: ProjectArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the project as a DOAP RDF/XML document.
    Render {
        #[command(flatten)]
        project: ProjectArgs,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = "en")]
        lang: String,
        #[arg(long)]
        no_header: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check that a file is well-formed DOAP RDF/XML.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}
