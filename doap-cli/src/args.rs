use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ProjectArgs {
    /// Project metadata document (JSON or YAML).
    #[arg(long)]
    pub project: PathBuf,
    /// Settings document (JSON or YAML), reachable as `settings.*`.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}
