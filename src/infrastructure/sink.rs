//! Render sinks: where rendered markup ends up

use crate::error::{CalprintError, Result};
use crate::infrastructure::page::{PageTemplate, PageVars};

/// Destination document for a render pass
pub trait RenderSink {
    /// Replace everything inside the container with `markup`
    fn replace_content(&mut self, container_id: &str, markup: &str) -> Result<()>;

    /// Whether an element with this id exists in the document
    fn find_element(&self, id: &str) -> bool;

    /// Scroll the element with this id into view
    fn scroll_into_view(&mut self, id: &str) -> Result<()>;
}

fn markup_has_id(markup: &str, id: &str) -> bool {
    markup.contains(&format!("id=\"{}\"", id))
}

/// Single in-memory container
#[derive(Debug, Clone)]
pub struct MemorySink {
    container_id: String,
    content: String,
    scrolled_to: Option<String>,
}

impl MemorySink {
    pub fn new(container_id: impl Into<String>) -> Self {
        MemorySink {
            container_id: container_id.into(),
            content: String::new(),
            scrolled_to: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl RenderSink for MemorySink {
    fn replace_content(&mut self, container_id: &str, markup: &str) -> Result<()> {
        if container_id != self.container_id {
            return Err(CalprintError::ContainerMissing(container_id.to_string()));
        }
        self.content = markup.to_string();
        self.scrolled_to = None;
        Ok(())
    }

    fn find_element(&self, id: &str) -> bool {
        id == self.container_id || markup_has_id(&self.content, id)
    }

    fn scroll_into_view(&mut self, id: &str) -> Result<()> {
        if !self.find_element(id) {
            return Err(CalprintError::ElementMissing(id.to_string()));
        }
        self.scrolled_to = Some(id.to_string());
        Ok(())
    }
}

/// Full HTML page built from a template
#[derive(Debug, Clone)]
pub struct HtmlPageSink {
    template: PageTemplate,
    title: String,
    container_id: String,
    today_id: String,
    inner: MemorySink,
}

impl HtmlPageSink {
    /// Fails up front when the template has no container placeholder
    pub fn new(
        template: PageTemplate,
        title: impl Into<String>,
        container_id: impl Into<String>,
        today_id: impl Into<String>,
    ) -> Result<Self> {
        let container_id = container_id.into();
        if !template.has_container() {
            return Err(CalprintError::ContainerMissing(container_id));
        }

        Ok(HtmlPageSink {
            template,
            title: title.into(),
            inner: MemorySink::new(container_id.clone()),
            container_id,
            today_id: today_id.into(),
        })
    }

    /// Render the complete page
    pub fn finish(&self) -> Result<String> {
        self.template.render(&PageVars {
            title: &self.title,
            container_id: &self.container_id,
            today_id: &self.today_id,
            content: self.inner.content(),
            scroll_target: self.inner.scrolled_to(),
        })
    }

    pub fn content(&self) -> &str {
        self.inner.content()
    }
}

impl RenderSink for HtmlPageSink {
    fn replace_content(&mut self, container_id: &str, markup: &str) -> Result<()> {
        self.inner.replace_content(container_id, markup)
    }

    fn find_element(&self, id: &str) -> bool {
        self.inner.find_element(id)
    }

    fn scroll_into_view(&mut self, id: &str) -> Result<()> {
        self.inner.scroll_into_view(id)
    }
}
