//! Daily answer records and the per-model result sequence.

use chrono::NaiveDate;
use serde::Serialize;

/// One model's recorded answer for one calendar day.
///
/// `model` carries the concrete version label reported that day (e.g.
/// `gpt-4o-2024-11-20`), which may differ from the tracked model name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub answer: String,
    pub model: String,
    pub correct: bool,
}

/// Ordered daily results for one tracked model.
///
/// Invariants after [`ModelResults::normalize`]: dates are strictly
/// increasing, and no record follows the first incorrect one.
#[derive(Debug, Clone, Serialize)]
pub struct ModelResults {
    pub name: String,
    pub results: Vec<DailyResult>,
}

impl ModelResults {
    pub fn new(name: impl Into<String>, results: Vec<DailyResult>) -> Self {
        let mut out = Self {
            name: name.into(),
            results,
        };
        out.normalize();
        out
    }

    /// Restore the sequence invariants: sort by date (stable, so the
    /// first record wins on a duplicate date), drop duplicates, and
    /// truncate after the first incorrect record. The incorrect record
    /// itself is kept; it marks the first behavior change.
    fn normalize(&mut self) {
        self.results.sort_by_key(|r| r.date);
        self.results.dedup_by_key(|r| r.date);

        if let Some(pos) = self.results.iter().position(|r| !r.correct) {
            self.results.truncate(pos + 1);
        }
    }

    /// The first day the model answered incorrectly, if any. After
    /// normalization this is always the last record when present.
    pub fn first_incorrect(&self) -> Option<&DailyResult> {
        self.results.iter().find(|r| !r.correct)
    }

    /// Version label from the earliest record.
    pub fn version(&self) -> Option<&str> {
        self.results.first().map(|r| r.model.as_str())
    }

    /// Date of the earliest record.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.results.first().map(|r| r.date)
    }
}

/// The earliest date across every loaded model, or `None` when no model
/// has any data.
pub fn earliest_date(models: &[ModelResults]) -> Option<NaiveDate> {
    models.iter().filter_map(|m| m.start_date()).min()
}
