//! Handler for the `check` command.

use crate::cli::{output, CheckCommand};
use crate::config::Config;
use crate::error::Result;

/// Execute a check subcommand.
pub fn execute(command: &CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Config(args) => {
            let config = Config::load(&args.config)?;
            output::ok(&format!(
                "config valid: {} model(s), output to {}",
                config.data.models.len(),
                config.site.output_dir.display()
            ));
            Ok(())
        }
    }
}
