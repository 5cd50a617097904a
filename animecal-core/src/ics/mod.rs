//! ICS file generation and parsing.
//!
//! `parse`/`generate` go through the structured [`Calendar`](crate::Calendar)
//! model. `lines` works on raw text and is used where a strict parser would
//! reject the input (sanitizing, validation).

mod generate;
pub mod lines;
mod parse;

pub use generate::generate_ics;
pub use parse::parse_calendar;
