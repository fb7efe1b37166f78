//! Result loading from per-model CSV files.
//!
//! One file per tracked model, `<data.dir>/<name>.csv`, with a header
//! row `date,answer,model,correct`. Loading is deliberately lenient: a
//! missing file skips the model with a warning, a row with an
//! unparseable date is dropped, and a missing or unrecognized `correct`
//! flag coerces to false.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::DataConfig;
use crate::domain::{DailyResult, ModelResults};
use crate::error::Result;

/// Raw CSV row before coercion. All fields but the date are optional.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    correct: Option<String>,
}

/// Coerce the `correct` column: the trimmed, case-insensitive string
/// `true` counts, anything else (including a missing column) is false.
fn coerce_correct(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Load one model's results. Returns `Ok(None)` when the file does not
/// exist; that model is simply left off the page.
pub fn load_model(data_dir: &Path, name: &str) -> Result<Option<ModelResults>> {
    let path = data_dir.join(format!("{name}.csv"));
    if !path.exists() {
        warn!(model = name, path = %path.display(), "result file missing, skipping model");
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)?;

    let mut results = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        let raw = match record {
            Ok(raw) => raw,
            Err(e) => {
                warn!(model = name, error = %e, "dropping malformed row");
                continue;
            }
        };

        let date = match NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!(model = name, date = %raw.date, "dropping row with unparseable date");
                continue;
            }
        };

        results.push(DailyResult {
            date,
            answer: raw.answer,
            model: if raw.model.is_empty() {
                name.to_string()
            } else {
                raw.model
            },
            correct: coerce_correct(raw.correct.as_deref()),
        });
    }

    let model = ModelResults::new(name, results);
    debug!(model = name, days = model.results.len(), "loaded results");
    Ok(Some(model))
}

/// Load every configured model, in configuration order. Missing files
/// are skipped; other IO or CSV-reader failures propagate.
pub fn load_all(data: &DataConfig) -> Result<Vec<ModelResults>> {
    let mut out = Vec::with_capacity(data.models.len());
    for name in &data.models {
        if let Some(model) = load_model(&data.dir, name)? {
            out.push(model);
        }
    }
    Ok(out)
}
