use std::path::PathBuf;

use anyhow::Result;
use fauxdict_runtime::{Config, resolve_data_dir};
use is_terminal::IsTerminal;

use super::args::{Cli, Commands, ThemeCommand};
use super::handlers::{self, HandlerContext};
use crate::logging::{self, LOG_FILE, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir: PathBuf = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_from(&Config::path_in(&data_dir))?.with_source_override(cli.source);

    let command = cli.command.unwrap_or(Commands::Browse);
    let interactive = matches!(command, Commands::Browse) && std::io::stdout().is_terminal();

    let target = if interactive {
        LogTarget::File(data_dir.join(LOG_FILE))
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let ctx = HandlerContext::new(cli.format, data_dir, config);

    match command {
        Commands::Browse if interactive => handlers::browse::handle(&ctx),
        Commands::Browse => handlers::browse::handle_non_interactive(&ctx),
        Commands::List { pages, search } => handlers::list::handle(&ctx, pages, search),
        Commands::Random { pages, search } => handlers::random::handle(&ctx, pages, search),
        Commands::Theme { command } => {
            handlers::theme::handle(&ctx, command.unwrap_or(ThemeCommand::Show))
        }
        Commands::Source => handlers::source::handle(&ctx),
    }
}
