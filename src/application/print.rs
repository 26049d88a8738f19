//! Print calendar use case
//!
//! Loads the input file, renders it with the configured options and returns
//! the finished document.

use crate::application::render::{EntryRenderer, RenderOptions, RenderSummary};
use crate::error::{CalprintError, Result};
use crate::infrastructure::{load_entries, Config, HtmlPageSink, MemorySink, PageTemplate};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

/// Options for a print run
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Calendar file to read
    pub input: PathBuf,

    /// Emit only the rendered blocks instead of a full page
    pub fragment: bool,

    /// Day to highlight
    pub today: NaiveDate,
}

/// Result of a print run
#[derive(Debug, Clone)]
pub struct PrintReport {
    pub document: String,
    pub summary: RenderSummary,
}

/// Parse `--today`, defaulting to the local date
pub fn resolve_today(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| CalprintError::InvalidDate(value.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

/// Service for printing a calendar file
pub struct PrintService {
    config: Config,
}

impl PrintService {
    pub fn new(config: Config) -> Self {
        PrintService { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute the print run
    pub fn execute(&self, options: &PrintOptions) -> Result<PrintReport> {
        let entries = load_entries(&options.input)?;
        let renderer = EntryRenderer::new(RenderOptions::from(&self.config));

        let (document, summary) = if options.fragment {
            let mut sink = MemorySink::new(self.config.container_id.as_str());
            let summary = renderer.render(&entries, options.today, &mut sink)?;
            (sink.into_content(), summary)
        } else {
            let template = match &self.config.template {
                Some(path) => PageTemplate::from_file(path)?,
                None => PageTemplate::builtin(),
            };
            let mut sink = HtmlPageSink::new(
                template,
                self.config.title.as_str(),
                self.config.container_id.as_str(),
                self.config.today_id.as_str(),
            )?;
            let summary = renderer.render(&entries, options.today, &mut sink)?;
            (sink.finish()?, summary)
        };

        info!(
            input = %options.input.display(),
            dated = summary.dated,
            today = summary.scrolled_to_today,
            "calendar rendered"
        );

        Ok(PrintReport { document, summary })
    }
}
