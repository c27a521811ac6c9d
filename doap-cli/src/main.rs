use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "doap", version, about = "Project metadata expressions and DOAP output")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    std::process::exit(run_command(cli.command));
}

fn run_command(command: Command) -> i32 {
    match command {
        Command::Eval {
            expression,
            project,
            document,
            output,
        } => cmd::eval::eval_cmd(&expression, project.as_deref(), document.as_deref(), output),
        Command::Interpolate {
            template,
            project,
            set_properties,
            output,
        } => cmd::interpolate::interpolate_cmd(&template, project, &set_properties, output),
        Command::Roles { project, output } => cmd::roles::roles_cmd(project, output),
        Command::Render {
            project,
            out,
            lang,
            no_header,
            output,
        } => cmd::render::render_cmd(project, out.as_deref(), &lang, no_header, output),
        Command::Validate { path, output } => cmd::validate::validate_cmd(&path, output),
    }
}
