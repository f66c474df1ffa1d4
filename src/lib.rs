//! Renumber Markdown headings.
//!
//! Each heading depth gets its own numeral style and separator. The engine is
//! a pure function of text and configuration: [`correct_headings`] parses each
//! heading line, advances per-depth counters, renders the number and rebuilds
//! the line while keeping inline decoration and replacing numbers typed by
//! hand.

#[macro_use]
mod macros;

pub mod config;
pub mod counters;
pub mod error;
pub mod fence;
pub mod heading;
pub mod io;
pub mod numbering;
pub mod numerals;
pub mod process;
pub mod strip;

pub use config::{LevelConfig, LevelOverride, NumberingConfig};
pub use counters::Counters;
pub use error::ConfigError;
pub use heading::{ParsedHeading, is_heading_line, parse_heading};
pub use io::rewrite;
pub use numbering::{format_number, rebuild_heading};
pub use numerals::NumeralStyle;
pub use process::{correct_headings, correct_lines, preview_headings, remove_heading_numbers};
pub use strip::{Stripped, strip_existing_number};
