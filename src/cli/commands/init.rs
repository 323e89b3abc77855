use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the configuration and state files.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;
    Ok(())
}
