//! Heading line detection and structural parsing.
//!
//! A heading line starts with one to six `#` markers followed by whitespace.
//! Its content splits into a decorative prefix, the title text and a
//! decorative suffix. Decoration is any run of doubled emphasis markers
//! (`**`, `__`), single backticks and inline HTML tags hugging the start or the
//! end of the content; it is carried through renumbering untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::strip::strip_existing_number;

/// Character repeated to mark heading depth.
pub const HEADING_MARKER: char = '#';

/// Deepest supported heading level.
pub const MAX_DEPTH: usize = 6;

static HEADING_RE: LazyLock<Regex> =
    lazy_regex!(r"^(#{1,6})\s+(.*)$", "heading pattern should compile");

/// A heading line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedHeading<'a> {
    /// Number of markers, 1 to 6.
    pub depth: usize,
    /// Leading decoration, verbatim.
    pub prefix: &'a str,
    /// Title with decoration and any typed number removed.
    pub text: &'a str,
    /// Trailing decoration, verbatim.
    pub suffix: &'a str,
    /// The number found at the start of the title, if any.
    pub original_number: Option<&'a str>,
}

impl ParsedHeading<'_> {
    /// Reassemble the heading content without the marker run.
    ///
    /// Whitespace that sat between the decoration and the title is not kept.
    #[must_use]
    pub fn original_content(&self) -> String {
        format!(
            "{}{}{}{}",
            self.prefix,
            self.original_number.unwrap_or_default(),
            self.text,
            self.suffix
        )
    }
}

/// Return `true` when `line` starts with a heading marker run and whitespace.
///
/// # Examples
///
/// ```
/// use mdheadnum::is_heading_line;
///
/// assert!(is_heading_line("## Scope"));
/// assert!(!is_heading_line("#hashtag"));
/// assert!(!is_heading_line("####### too deep"));
/// ```
#[must_use]
pub fn is_heading_line(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// Parse a heading line, returning `None` for any other line.
#[must_use]
pub fn parse_heading(line: &str) -> Option<ParsedHeading<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let depth = caps.get(1)?.as_str().len();
    let content = caps.get(2)?.as_str();

    let start = scan_prefix(content);
    let end = scan_suffix(content, start);
    let stripped = strip_existing_number(content[start..end].trim());

    Some(ParsedHeading {
        depth,
        prefix: &content[..start],
        text: stripped.clean,
        suffix: &content[end..],
        original_number: stripped.number,
    })
}

fn is_emphasis(b: u8) -> bool {
    b == b'*' || b == b'_'
}

/// Byte offset where the leading decoration of `content` ends.
fn scan_prefix(content: &str) -> usize {
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if i + 1 < bytes.len() && is_emphasis(bytes[i]) && bytes[i] == bytes[i + 1] {
            i += 2;
        } else if bytes[i] == b'`' {
            i += 1;
        } else if let Some(len) = opening_tag_len(&content[i..]) {
            i += len;
        } else {
            break;
        }
    }
    i
}

/// Byte offset where the trailing decoration of `content` begins.
///
/// Scanning never moves past `floor`, the end of the leading decoration.
fn scan_suffix(content: &str, floor: usize) -> usize {
    let bytes = content.as_bytes();
    let mut end = bytes.len();
    while end > floor {
        let last = bytes[end - 1];
        if end - 1 > floor && is_emphasis(last) && bytes[end - 2] == last {
            end -= 2;
        } else if last == b'`' {
            end -= 1;
        } else if let Some(len) = closing_tag_len(&content[floor..end]) {
            end -= len;
        } else {
            break;
        }
    }
    end
}

/// Length of an opening tag such as `<span class="x">` at the start of `s`.
fn opening_tag_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('<')?;
    if !rest.as_bytes().first()?.is_ascii_alphabetic() {
        return None;
    }
    rest.find('>').map(|close| close + 2)
}

/// Length of a closing tag such as `</span>` at the end of `s`.
fn closing_tag_len(s: &str) -> Option<usize> {
    let body = s.strip_suffix('>')?.as_bytes();
    let name_len = body
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_len == 0 {
        return None;
    }
    let name_start = body.len() - name_len;
    if !body[name_start].is_ascii_alphabetic() || !body[..name_start].ends_with(b"</") {
        return None;
    }
    Some(name_len + 3)
}
