//! HTML rendering via compile-time askama templates.
//!
//! The page is a single `index.html`: masthead, the tracked question
//! with both reference answers, and one calendar block per model.

use askama::Template;
use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::{weeks, CalendarDay, ModelResults, Window};
use crate::error::Result;

/// Stylesheet shipped next to the rendered page.
pub const STYLESHEET: &str = include_str!("../static/style.css");

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub tagline: String,
    pub question: QuestionView,
    pub models: Vec<ModelView>,
    pub build_date: String,
}

pub struct QuestionView {
    pub text: String,
    pub correct_answer: String,
    pub correct_note: String,
    pub incorrect_answer: String,
    pub incorrect_note: String,
}

pub struct ModelView {
    pub display_name: String,
    pub version: String,
    pub change: Option<ChangeView>,
    pub weeks: Vec<Vec<DayView>>,
}

/// The first day a model answered incorrectly.
pub struct ChangeView {
    pub date: String,
    pub answer: String,
}

#[derive(Clone)]
pub struct DayView {
    pub class: &'static str,
    pub tooltip: String,
}

/// Long-form date used in tooltips and callouts, e.g. "January 20, 2025".
fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn day_view(day: &CalendarDay) -> DayView {
    match &day.result {
        Some(result) => DayView {
            class: if result.correct { "ok" } else { "bad" },
            tooltip: format!(
                "{}: {} ({}): {}",
                format_long(day.date),
                result.answer,
                result.model,
                if result.correct { "Correct" } else { "Incorrect" }
            ),
        },
        None => DayView {
            class: "none",
            tooltip: format_long(day.date),
        },
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn model_view(model: &ModelResults, window: Window) -> ModelView {
    let days = window.days(&model.results);
    let day_views: Vec<DayView> = days.iter().map(day_view).collect();

    ModelView {
        display_name: capitalize(&model.name),
        version: model.version().unwrap_or("Unknown").to_string(),
        change: model.first_incorrect().map(|r| ChangeView {
            date: format_long(r.date),
            answer: r.answer.clone(),
        }),
        weeks: weeks(&day_views),
    }
}

/// Render the whole page to an HTML string.
pub fn render(config: &Config, models: &[ModelResults], window: Window, today: NaiveDate) -> Result<String> {
    let template = IndexTemplate {
        title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        question: QuestionView {
            text: config.question.text.clone(),
            correct_answer: config.question.correct_answer.clone(),
            correct_note: config.question.correct_note.clone(),
            incorrect_answer: config.question.incorrect_answer.clone(),
            incorrect_note: config.question.incorrect_note.clone(),
        },
        models: models.iter().map(|m| model_view(m, window)).collect(),
        build_date: format_long(today),
    };

    Ok(template.render()?)
}
