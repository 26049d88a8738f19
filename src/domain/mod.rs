//! Domain layer - Entry classification and rendering

pub mod calendar;
pub mod key;
pub mod markup;

pub use calendar::{Calendar, DatedEntry, EntryMap, RawEntry, WeekdayNotes};
pub use key::EntryKey;
pub use markup::BlockStyle;
