//! HTML fragment for a classified calendar

use crate::domain::calendar::{Calendar, DatedEntry};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use maud::{html, Markup, PreEscaped};
use std::fmt::Write;

/// Default chrono format for the date line of each block
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %d %Y";

/// Default id of the block for the current day
pub const DEFAULT_TODAY_ID: &str = "today";

/// How blocks are labelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyle {
    pub date_format: String,
    pub today_id: String,
    /// Entry text is already HTML; insert it as is
    pub raw_html: bool,
}

impl Default for BlockStyle {
    fn default() -> Self {
        BlockStyle {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            today_id: DEFAULT_TODAY_ID.to_string(),
            raw_html: false,
        }
    }
}

/// Whether `format` is a chrono format that renders a date without a
/// timezone. `%z`, `%Z` and `%:z` parse fine but fail on naive dates.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut out = String::new();
    write!(out, "{}", NaiveDateTime::default().format(format)).is_ok()
}

/// Render one block per dated entry, in calendar order.
///
/// Only the first entry falling on `today` carries the today id, so the
/// fragment never holds duplicate ids.
pub fn render_blocks(calendar: &Calendar, today: NaiveDate, style: &BlockStyle) -> Markup {
    let today_index = calendar.days.iter().position(|entry| entry.is_on(today));

    html! {
        @for (idx, entry) in calendar.days.iter().enumerate() {
            (render_block(entry, calendar.note_for(entry), today_index == Some(idx), style))
        }
    }
}

fn render_block(entry: &DatedEntry, note: Option<&str>, is_today: bool, style: &BlockStyle) -> Markup {
    let id = is_today.then_some(style.today_id.as_str());
    let shown = entry.at.format(&style.date_format).to_string();

    html! {
        div id=[id] {
            pre {
                (shown)
                br;
                (text(&entry.data, style.raw_html))
                @if let Some(note) = note {
                    (text(note, style.raw_html))
                }
            }
        }
        br;
    }
}

fn text(value: &str, raw_html: bool) -> Markup {
    if raw_html {
        PreEscaped(value.to_string())
    } else {
        html! { (value) }
    }
}
