//! Command handlers for `templet-ctl`.

mod check;
mod list;
mod render;

use crate::cli_config::load_registry_config;
use crate::{Cli, Commands};

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render(args) => render::handle_render_command(args, cli.config.as_deref()),
        Commands::List => list::handle_list_command(&load_registry_config(cli.config.as_deref())?),
        Commands::Check => {
            check::handle_check_command(&load_registry_config(cli.config.as_deref())?)
        }
    }
}
