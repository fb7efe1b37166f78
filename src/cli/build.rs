//! Handler for the `build` command.

use chrono::Local;
use tracing::info;

use crate::app::SiteBuilder;
use crate::cli::{output, BuildArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the build command.
pub fn execute(args: &BuildArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(ref out) = args.out {
        config.site.output_dir = out.clone();
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    info!(date = %today, "modelwatch build starting");

    let summary = SiteBuilder::build(&config, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::section("Build summary");
        output::key_value("Models", summary.models);
        output::key_value("Days", summary.days);
        output::key_value(
            "Window",
            format!("{} to {}", summary.window_start, summary.window_end),
        );
        output::key_value("Output", summary.output_dir.display());
        output::ok("site generated");
    }

    Ok(())
}
