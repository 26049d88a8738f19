//! HTML page template wrapped around the rendered fragment

use crate::error::{CalprintError, Result};
use maud::html;
use std::fs;
use std::path::Path;

const CONTENT: &str = "{CONTENT}";

// Built-in page
const DEFAULT_PAGE: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{TITLE}</title>\n\
<style>\n\
body { font-family: monospace; }\n\
#{TODAY_ID} { color: red; }\n\
</style>\n\
</head>\n\
<body>\n\
<div id=\"{CONTAINER_ID}\">{CONTENT}</div>\n\
{SCRIPT}\n\
</body>\n\
</html>\n";

/// Values substituted into a page
#[derive(Debug, Clone)]
pub struct PageVars<'a> {
    pub title: &'a str,
    pub container_id: &'a str,
    pub today_id: &'a str,
    pub content: &'a str,
    /// Element to scroll into view once the page loads
    pub scroll_target: Option<&'a str>,
}

/// Page template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    content: String,
}

impl PageTemplate {
    pub fn builtin() -> Self {
        PageTemplate {
            content: DEFAULT_PAGE.to_string(),
        }
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CalprintError::Template(format!("Failed to read template file: {}", e)))?;

        Ok(PageTemplate { content })
    }

    pub fn from_string(content: impl Into<String>) -> Self {
        PageTemplate {
            content: content.into(),
        }
    }

    /// Whether the template has somewhere to put the rendered blocks
    pub fn has_container(&self) -> bool {
        self.content.contains(CONTENT)
    }

    /// Render the page. The template is split at `{CONTENT}` before any
    /// substitution, so neither entry text nor the title is scanned for
    /// placeholders.
    pub fn render(&self, vars: &PageVars) -> Result<String> {
        let (before, after) = self
            .content
            .split_once(CONTENT)
            .ok_or_else(|| CalprintError::ContainerMissing(vars.container_id.to_string()))?;

        let title = html! { (vars.title) }.into_string();
        let script = match vars.scroll_target {
            Some(id) => scroll_script(id)?,
            None => String::new(),
        };

        let fill = |part: &str| {
            part.replace("{TITLE}", &title)
                .replace("{CONTAINER_ID}", vars.container_id)
                .replace("{TODAY_ID}", vars.today_id)
                .replace("{SCRIPT}", &script)
        };

        Ok(format!("{}{}{}", fill(before), vars.content, fill(after)))
    }
}

/// Inline script scrolling the element with `id` into view
fn scroll_script(id: &str) -> Result<String> {
    let literal = serde_json::to_string(id)?;
    Ok(format!(
        "<script>document.getElementById({}).scrollIntoView();</script>",
        literal
    ))
}
