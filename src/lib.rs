//! Modelwatch - static site generator for daily AI model answer tracking.
//!
//! This crate reads one CSV of dated answers per tracked model, decides
//! for each day whether the model answered a fixed factual question
//! correctly, and renders a per-model calendar heat-map into a static
//! HTML page. Everything happens once, synchronously, at build time.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Daily results, normalization, and calendar windows
//! - [`loader`] - Per-model CSV loading with lenient coercion
//! - [`render`] - askama templates and view models for the page
//! - [`app`] - One-shot build orchestration
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface and handlers
//!
//! # Example
//!
//! ```no_run
//! use modelwatch::app::SiteBuilder;
//! use modelwatch::config::Config;
//!
//! let config = Config::load("config.toml")?;
//! let today = chrono::Local::now().date_naive();
//! let summary = SiteBuilder::build(&config, today)?;
//! println!("rendered {} models", summary.models);
//! # Ok::<(), modelwatch::error::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod render;
