//! Report rendering
//!
//! Turns scenario and suite reports into text for a terminal or a log.

mod formatter;

pub use formatter::{FormatterOptions, ReportFormatter};
