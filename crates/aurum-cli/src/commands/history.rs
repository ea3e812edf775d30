use crate::cli::{HistoryArgs, OutputFormat};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::history_store;

pub fn run(
    args: &HistoryArgs,
    config: &Config,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let store = history_store(args.history.as_deref(), config);
    let history = store.load();

    output::render_history(history.tail(args.last), format, pretty)
}
