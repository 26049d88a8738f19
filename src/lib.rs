//! calprint - Calendar page renderer
//!
//! Turns a calendar file of date-keyed entries and recurring weekday notes
//! into a sorted HTML listing with the current day highlighted.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CalprintError;
