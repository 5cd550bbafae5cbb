//! `templet-ctl`: render and check directory-driven templates from the
//! command line.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "templet-ctl", version, about, styles = output::clap_styles())]
pub(crate) struct Cli {
    /// Registry config file (default: ./.templet.toml, then ~/.config/templet.toml)
    #[arg(long, global = true, env = "TEMPLET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log discovery and compile steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Render a template to stdout or a file
    Render(RenderArgs),
    /// List templates in the registry config
    List,
    /// Compile every configured template and report failures
    Check,
}

#[derive(Debug, Args)]
pub(crate) struct RenderArgs {
    /// Name of a configured template (its content directory's name)
    #[arg(
        short,
        long,
        conflicts_with_all = ["content", "layout", "ext"],
        required_unless_present = "content"
    )]
    pub template: Option<String>,

    /// Content directory of an ad-hoc template
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Layout directory of an ad-hoc template
    #[arg(long, requires = "content")]
    pub layout: Option<PathBuf>,

    /// Template file extension, leading dot included
    #[arg(long, requires = "content")]
    pub ext: Option<String>,

    /// JSON file with the render data (`-` for stdin)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("templet={level}").parse()?)
                .add_directive(format!("templet_ctl={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_tracing(cli.verbose).and_then(|()| commands::run(cli));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
