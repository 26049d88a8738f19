//! Application layer - Use cases and orchestration

pub mod print;
pub mod render;

pub use print::{resolve_today, PrintOptions, PrintReport, PrintService};
pub use render::{EntryRenderer, RenderOptions, RenderSummary};
