//! Render calendar use case
//!
//! One pass: classify the input, sort the dated entries, attach weekday
//! notes, write the blocks into the sink and scroll to today's block.

use crate::domain::markup::{self, BlockStyle};
use crate::domain::{Calendar, EntryMap};
use crate::error::{CalprintError, Result};
use crate::infrastructure::config::{Config, DEFAULT_CONTAINER_ID};
use crate::infrastructure::RenderSink;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Options for a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Container whose content is replaced
    pub container_id: String,

    /// Date format and today id
    pub style: BlockStyle,

    /// Reject keys that are neither dates nor weekday names
    pub strict: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            style: BlockStyle::default(),
            strict: false,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        RenderOptions {
            container_id: config.container_id.clone(),
            style: config.block_style(),
            strict: config.strict,
        }
    }
}

/// What a render pass produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of date blocks written
    pub dated: usize,

    /// Number of keys stored as weekday notes, unrecognized keys included
    pub notes: usize,

    /// Keys that are neither dates nor weekday names
    pub unrecognized: Vec<String>,

    /// Whether a block for today was found and scrolled to
    pub scrolled_to_today: bool,
}

/// Renders an entry map into a sink
#[derive(Debug, Clone, Default)]
pub struct EntryRenderer {
    options: RenderOptions,
}

impl EntryRenderer {
    pub fn new(options: RenderOptions) -> Self {
        EntryRenderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Execute a render pass
    ///
    /// Replaces the container content in `sink` and scrolls to the block for
    /// `today` when there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The date format cannot render a date without a timezone
    /// - Strict mode is on and a key is neither a date nor a weekday name
    /// - The sink has no container with the configured id
    pub fn render<S>(&self, entries: &EntryMap, today: NaiveDate, sink: &mut S) -> Result<RenderSummary>
    where
        S: RenderSink + ?Sized,
    {
        if !markup::is_valid_date_format(&self.options.style.date_format) {
            return Err(CalprintError::Config(format!(
                "Invalid date format: '{}'",
                self.options.style.date_format
            )));
        }

        let calendar = Calendar::from_entries(entries);

        for key in &calendar.unrecognized {
            if self.options.strict {
                return Err(CalprintError::UnrecognizedKey(key.clone()));
            }
            warn!(key = %key, "key is neither a date nor a weekday name; it will not be shown");
        }

        let fragment = markup::render_blocks(&calendar, today, &self.options.style).into_string();
        sink.replace_content(&self.options.container_id, &fragment)?;

        let today_id = self.options.style.today_id.as_str();
        let scrolled_to_today = if sink.find_element(today_id) {
            sink.scroll_into_view(today_id)?;
            true
        } else {
            debug!(%today, "no entry for today; nothing to scroll to");
            false
        };

        debug!(
            dated = calendar.days.len(),
            notes = calendar.weekdays.len(),
            scrolled_to_today,
            "render complete"
        );

        Ok(RenderSummary {
            dated: calendar.days.len(),
            notes: calendar.weekdays.len(),
            unrecognized: calendar.unrecognized,
            scrolled_to_today,
        })
    }
}
