//! Build orchestration.
//!
//! One pass, synchronous: load the configured models, compute the
//! calendar window, render the page, and write the site to disk.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{earliest_date, Window};
use crate::error::Result;
use crate::{loader, render};

/// What a build produced, for the CLI summary.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub models: usize,
    pub days: usize,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub output_dir: PathBuf,
}

pub struct SiteBuilder;

impl SiteBuilder {
    /// Generate the site for the given date. `today` is injected so
    /// builds are reproducible; callers pass the current date or a
    /// `--date` override.
    pub fn build(config: &Config, today: NaiveDate) -> Result<BuildSummary> {
        let models = loader::load_all(&config.data)?;
        if models.is_empty() {
            warn!("no result files found, rendering an empty page");
        }

        let window = Window::compute(earliest_date(&models), today, &config.window);
        let days = window.last.signed_duration_since(window.first).num_days() as usize + 1;
        info!(
            start = %window.first,
            end = %window.last,
            models = models.len(),
            "rendering calendar window"
        );

        let html = render::render(config, &models, window, today)?;

        let out = &config.site.output_dir;
        std::fs::create_dir_all(out)?;
        std::fs::write(out.join("index.html"), html)?;
        std::fs::write(out.join("style.css"), render::STYLESHEET)?;
        info!(output = %out.display(), "site written");

        Ok(BuildSummary {
            models: models.len(),
            days,
            window_start: window.first,
            window_end: window.last,
            output_dir: out.clone(),
        })
    }
}
