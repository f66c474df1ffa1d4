//! Detection and removal of heading numbers typed by hand.
//!
//! Patterns are tried in a fixed order and only a match at the very start of
//! the title counts:
//!
//! 1. `第` + Chinese numerals + one of `章节条款目`, then optional punctuation.
//! 2. A single numeral token (Chinese numerals, ASCII digits, Roman letters,
//!    Latin letters or one circled glyph) followed by at least one
//!    punctuation character.
//! 3. `(digits)` followed by optional whitespace.
//! 4. `（digits）` followed by optional whitespace.

/// Result of [`strip_existing_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripped<'a> {
    /// The title with the number removed and surrounding whitespace trimmed.
    pub clean: &'a str,
    /// The exact prefix that was recognised as a number, punctuation included.
    pub number: Option<&'a str>,
}

fn is_chinese_numeral(c: char) -> bool {
    matches!(
        c,
        '零' | '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千'
    )
}

fn is_legal_unit(c: char) -> bool {
    matches!(c, '章' | '节' | '条' | '款' | '目')
}

fn is_roman_letter(c: char) -> bool {
    matches!(c, 'i' | 'v' | 'x' | 'I' | 'V' | 'X')
}

fn is_circled_glyph(c: char) -> bool {
    matches!(c, '①'..='⑳' | '❶'..='❿' | '➀'..='➓')
}

fn is_number_punctuation(c: char) -> bool {
    c.is_whitespace() || matches!(c, '、' | '.' | ',' | '。' | '，' | '．' | '）' | ')')
}

/// Byte length of the longest prefix of `s` whose characters satisfy `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(idx, _)| idx)
}

fn legal_prefix(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('第')?;
    let digits = run_len(rest, is_chinese_numeral);
    if digits == 0 {
        return None;
    }
    let unit = rest[digits..].chars().next().filter(|&c| is_legal_unit(c))?;
    let after = digits + unit.len_utf8();
    let punct = run_len(&rest[after..], is_number_punctuation);
    Some('第'.len_utf8() + after + punct)
}

fn token_prefix(text: &str) -> Option<usize> {
    let classes: [fn(char) -> bool; 4] = [
        is_chinese_numeral,
        |c| c.is_ascii_digit(),
        is_roman_letter,
        |c| c.is_ascii_alphabetic(),
    ];
    let token = classes
        .iter()
        .map(|class| run_len(text, class))
        .chain(
            text.chars()
                .next()
                .filter(|&c| is_circled_glyph(c))
                .map(char::len_utf8),
        )
        .filter(|&len| len > 0)
        .find(|&len| run_len(&text[len..], is_number_punctuation) > 0)?;
    Some(token + run_len(&text[token..], is_number_punctuation))
}

fn paren_prefix(text: &str, open: char, close: char) -> Option<usize> {
    let rest = text.strip_prefix(open)?;
    let digits = run_len(rest, |c| c.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(close)?;
    let after = open.len_utf8() + digits + close.len_utf8();
    Some(after + run_len(&text[after..], char::is_whitespace))
}

/// Split a manually typed number off the front of a heading title.
///
/// # Examples
///
/// ```
/// use mdheadnum::strip_existing_number;
///
/// let stripped = strip_existing_number("第三章 总则");
/// assert_eq!(stripped.number, Some("第三章 "));
/// assert_eq!(stripped.clean, "总则");
///
/// assert_eq!(strip_existing_number("Overview").number, None);
/// ```
#[must_use]
pub fn strip_existing_number(text: &str) -> Stripped<'_> {
    let matched = legal_prefix(text)
        .or_else(|| token_prefix(text))
        .or_else(|| paren_prefix(text, '(', ')'))
        .or_else(|| paren_prefix(text, '（', '）'));
    match matched {
        Some(end) => Stripped {
            clean: text[end..].trim(),
            number: Some(&text[..end]),
        },
        None => Stripped {
            clean: text,
            number: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("第一章 总则", "第一章 ", "总则")]
    #[case("第十二条、适用范围", "第十二条、", "适用范围")]
    #[case("第三款Scope", "第三款", "Scope")]
    #[case("一、背景", "一、", "背景")]
    #[case("12. Results", "12. ", "Results")]
    #[case("IV. History", "IV. ", "History")]
    #[case("b) Option", "b) ", "Option")]
    #[case("③ Step", "③ ", "Step")]
    #[case("❷．Step", "❷．", "Step")]
    #[case("(3) Notes", "(3) ", "Notes")]
    #[case("(21)Notes", "(21)", "Notes")]
    #[case("（4） 附录", "（4） ", "附录")]
    #[case("3）Aside", "3）", "Aside")]
    fn strips_leading_numbers(#[case] input: &str, #[case] number: &str, #[case] clean: &str) {
        let stripped = strip_existing_number(input);
        assert_eq!(stripped.number, Some(number));
        assert_eq!(stripped.clean, clean);
    }

    #[rstest]
    #[case("Overview")]
    #[case("")]
    #[case("第章 总则")]
    #[case("1st place")]
    #[case("{1} Braced")]
    #[case("（一） 中文括号")]
    #[case("(a) letter in parens")]
    #[case("第一部分")]
    fn leaves_unnumbered_titles(#[case] input: &str) {
        let stripped = strip_existing_number(input);
        assert_eq!(stripped.number, None);
        assert_eq!(stripped.clean, input);
    }

    #[test]
    fn leading_word_followed_by_space_counts_as_number() {
        let stripped = strip_existing_number("Getting Started");
        assert_eq!(stripped.number, Some("Getting "));
        assert_eq!(stripped.clean, "Started");
    }

    #[test]
    fn dotted_path_strips_only_first_group() {
        let stripped = strip_existing_number("1.2 Scope");
        assert_eq!(stripped.number, Some("1."));
        assert_eq!(stripped.clean, "2 Scope");
    }

    #[rstest]
    #[case("第二章 总则")]
    #[case("1. Intro")]
    #[case("(1) Notes")]
    #[case("Summary")]
    fn stripping_twice_finds_nothing_new(#[case] input: &str) {
        let once = strip_existing_number(input);
        assert_eq!(strip_existing_number(once.clean).number, None);
    }
}
