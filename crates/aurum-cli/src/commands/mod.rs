pub mod history;
pub mod run;

use std::path::Path;

use aurum_core::HistoryStore;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = Config::load(&cli.config)?;

    match &cli.command {
        Command::Run(args) => run::run(args, &config, cli.format, cli.pretty),
        Command::History(args) => history::run(args, &config, cli.format, cli.pretty),
    }
}

pub(crate) fn history_store(override_path: Option<&Path>, config: &Config) -> HistoryStore {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.history.path.clone());
    HistoryStore::with_capacity(path, config.history.capacity)
}
