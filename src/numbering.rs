//! Rendering heading numbers and rebuilding heading lines around them.

use crate::{
    config::NumberingConfig,
    counters::Counters,
    heading::{HEADING_MARKER, ParsedHeading},
    strip::strip_existing_number,
};

/// Render the number for a heading at `depth` from the current counters.
///
/// Every numbered depth from 1 to `depth` contributes a digit group; the
/// groups are joined with `.`. With `only_last_level` set the last group is
/// used alone whenever there is more than one group or the heading's style is
/// a legal unit. An unnumbered depth yields an empty string.
///
/// # Examples
///
/// ```
/// use mdheadnum::{Counters, LevelConfig, NumberingConfig, NumeralStyle, format_number};
///
/// let mut config = NumberingConfig::none();
/// config.levels[0] = LevelConfig::new(Some(NumeralStyle::Decimal), "");
/// config.levels[1] = LevelConfig::new(Some(NumeralStyle::LowerAlpha), "");
/// let mut counters = Counters::new();
/// counters.update(1);
/// counters.update(2);
/// counters.update(2);
/// assert_eq!(format_number(&counters, 2, &config), "1.b");
/// ```
#[must_use]
pub fn format_number(counters: &Counters, depth: usize, config: &NumberingConfig) -> String {
    let Some(own_style) = config.style(depth) else {
        return String::new();
    };

    let mut groups: Vec<String> = (1..=depth)
        .filter_map(|d| config.style(d).map(|style| style.render(counters.get(d))))
        .collect();

    if config.only_last_level && (groups.len() > 1 || own_style.is_legal_unit()) {
        return groups.pop().unwrap_or_default();
    }
    groups.join(".")
}

/// Rebuild a heading line from its parsed parts and a rendered number.
///
/// An empty `number` drops any typed number. Otherwise the number and
/// `separator` go between the leading decoration and the title, taking the
/// place of the typed number when there was one.
///
/// # Examples
///
/// ```
/// use mdheadnum::{parse_heading, rebuild_heading};
///
/// let heading = parse_heading("## **3) Scope**").unwrap();
/// assert_eq!(rebuild_heading(&heading, "2", ". "), "## **2. Scope**");
/// assert_eq!(rebuild_heading(&heading, "", ". "), "## **Scope**");
/// ```
#[must_use]
pub fn rebuild_heading(heading: &ParsedHeading<'_>, number: &str, separator: &str) -> String {
    let mut line: String = std::iter::repeat_n(HEADING_MARKER, heading.depth).collect();
    line.push(' ');
    line.push_str(heading.prefix);
    if number.is_empty() {
        line.push_str(strip_existing_number(heading.text).clean);
    } else {
        line.push_str(number);
        line.push_str(separator);
        line.push_str(heading.text);
    }
    line.push_str(heading.suffix);
    line
}
