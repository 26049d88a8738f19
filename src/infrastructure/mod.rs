//! Infrastructure layer - External I/O and output targets

pub mod config;
pub mod logging;
pub mod page;
pub mod sink;
pub mod source;

pub use config::Config;
pub use page::PageTemplate;
pub use sink::{HtmlPageSink, MemorySink, RenderSink};
pub use source::{load_entries, parse_entries};
