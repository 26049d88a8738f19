//! Output formatting utilities

use crate::application::RenderSummary;
use std::path::Path;

/// One-line report after writing a page to disk
pub fn format_summary(summary: &RenderSummary, output: &Path) -> String {
    let noun = if summary.dated == 1 { "entry" } else { "entries" };
    let mut line = format!(
        "Rendered {} dated {} to {}",
        summary.dated,
        noun,
        output.display()
    );

    if summary.scrolled_to_today {
        line.push_str(" (today highlighted)");
    }

    if !summary.unrecognized.is_empty() {
        line.push_str(&format!(
            "\nSkipped keys: {}",
            summary.unrecognized.join(", ")
        ));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(dated: usize, today: bool, unrecognized: &[&str]) -> RenderSummary {
        RenderSummary {
            dated,
            notes: 0,
            unrecognized: unrecognized.iter().map(|k| k.to_string()).collect(),
            scrolled_to_today: today,
        }
    }

    #[test]
    fn test_format_plain() {
        let output = format_summary(&summary(3, false, &[]), Path::new("cal.html"));
        assert_eq!(output, "Rendered 3 dated entries to cal.html");
    }

    #[test]
    fn test_format_single_entry_with_today() {
        let output = format_summary(&summary(1, true, &[]), Path::new("cal.html"));
        assert_eq!(output, "Rendered 1 dated entry to cal.html (today highlighted)");
    }

    #[test]
    fn test_format_skipped_keys() {
        let output = format_summary(&summary(0, false, &["foo", "bar"]), Path::new("x.html"));
        assert!(output.ends_with("\nSkipped keys: foo, bar"));
    }
}
