//! Document-level heading renumbering.
//!
//! Lines are scanned top to bottom with a single set of counters. Heading
//! lines are parsed, numbered and rebuilt; every other line passes through
//! untouched. Nothing survives between calls.

use std::borrow::Cow;

use crate::{
    config::NumberingConfig,
    counters::Counters,
    fence::FenceTracker,
    heading::{HEADING_MARKER, parse_heading},
    numbering::{format_number, rebuild_heading},
};

/// Number of headings shown by [`preview_headings`] in the CLI.
pub const DEFAULT_PREVIEW_LEN: usize = 3;

struct Renumberer<'c> {
    config: &'c NumberingConfig,
    counters: Counters,
    fences: FenceTracker,
}

impl<'c> Renumberer<'c> {
    fn new(config: &'c NumberingConfig) -> Self {
        Self {
            config,
            counters: Counters::new(),
            fences: FenceTracker::new(),
        }
    }

    /// Rewrite one line. Returns `None` for lines that are not headings.
    fn heading<'l>(&mut self, line: &'l str) -> Option<Cow<'l, str>> {
        if self.config.skip_code_fences
            && (self.fences.observe(line) || self.fences.in_fence())
        {
            return None;
        }
        let heading = parse_heading(line)?;
        self.counters.update(heading.depth);
        let number = format_number(&self.counters, heading.depth, self.config);
        let rebuilt = rebuild_heading(&heading, &number, self.config.separator(heading.depth));
        if rebuilt == line {
            return Some(Cow::Borrowed(line));
        }
        log::debug!("renumbered heading `{line}` as `{rebuilt}`");
        Some(Cow::Owned(rebuilt))
    }

    fn line<'l>(&mut self, line: &'l str) -> Cow<'l, str> {
        self.heading(line).unwrap_or(Cow::Borrowed(line))
    }
}

/// Renumber every heading in `text`.
///
/// The text is split on `\n`; a `\r` ending a line is kept, so CRLF documents
/// round-trip. Line count and order never change.
///
/// # Examples
///
/// ```
/// use mdheadnum::{NumberingConfig, correct_headings};
///
/// let text = "# Intro\n## Background\n## Goals\n";
/// assert_eq!(
///     correct_headings(text, &NumberingConfig::default()),
///     "# 第一章Intro\n## 第一章.第一节、Background\n## 第一章.第二节、Goals\n",
/// );
/// ```
#[must_use]
pub fn correct_headings(text: &str, config: &NumberingConfig) -> String {
    let mut renumberer = Renumberer::new(config);
    let lines: Vec<String> = text
        .split('\n')
        .map(|raw| match raw.strip_suffix('\r') {
            Some(line) => format!("{}\r", renumberer.line(line)),
            None => renumberer.line(raw).into_owned(),
        })
        .collect();
    lines.join("\n")
}

/// Renumber headings in a slice of lines.
#[must_use]
pub fn correct_lines(lines: &[String], config: &NumberingConfig) -> Vec<String> {
    let mut renumberer = Renumberer::new(config);
    lines
        .iter()
        .map(|line| renumberer.line(line).into_owned())
        .collect()
}

/// Strip every heading number from `text`.
///
/// # Examples
///
/// ```
/// use mdheadnum::remove_heading_numbers;
///
/// assert_eq!(remove_heading_numbers("# 第一章 Intro\n## 1. Scope"), "# Intro\n## Scope");
/// ```
#[must_use]
pub fn remove_heading_numbers(text: &str) -> String {
    correct_headings(text, &NumberingConfig::none())
}

/// Renumber `text` and return the first `limit` headings, each with its marker
/// run replaced by an arrow.
#[must_use]
pub fn preview_headings(text: &str, config: &NumberingConfig, limit: usize) -> Vec<String> {
    let mut renumberer = Renumberer::new(config);
    text.split('\n')
        .map(|raw| raw.strip_suffix('\r').unwrap_or(raw))
        .filter_map(|line| renumberer.heading(line))
        .take(limit)
        .map(|line| {
            let title = line.trim_start_matches(HEADING_MARKER).trim_start();
            format!("→ {title}")
        })
        .collect()
}
