//! Numeral styles used when rendering heading counters.
//!
//! Every style maps a counter value onto a digit group: plain decimal, Chinese
//! numerals, bijective alphabetic sequences, Roman numerals, circled digits and
//! a handful of wrapped variants (full-width parentheses, braces and the
//! `第…章` legal units).

use std::{fmt, str::FromStr};

const CHINESE_DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const CIRCLED: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱',
    '⑲', '⑳',
];

const ROMAN_TABLE: &[(usize, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value spelt with Chinese numerals; anything above falls back to
/// decimal digits.
pub const CHINESE_MAX: usize = 99_999;

/// A numeral style selectable for one heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralStyle {
    Decimal,
    Chinese,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    Circle,
    DecimalParen,
    DecimalParenHalf,
    ChineseParen,
    LowerAlphaParen,
    UpperAlphaParen,
    LowerRomanParen,
    UpperRomanParen,
    DecimalBrace,
    ChapterChinese,
    SectionChinese,
    SubsectionChinese,
}

impl NumeralStyle {
    /// All styles in the order `--list-styles` prints them.
    pub const ALL: [Self; 18] = [
        Self::Decimal,
        Self::Chinese,
        Self::LowerAlpha,
        Self::UpperAlpha,
        Self::LowerRoman,
        Self::UpperRoman,
        Self::Circle,
        Self::DecimalParen,
        Self::DecimalParenHalf,
        Self::ChineseParen,
        Self::LowerAlphaParen,
        Self::UpperAlphaParen,
        Self::LowerRomanParen,
        Self::UpperRomanParen,
        Self::DecimalBrace,
        Self::ChapterChinese,
        Self::SectionChinese,
        Self::SubsectionChinese,
    ];

    /// The configuration key for this style.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Chinese => "chinese",
            Self::LowerAlpha => "lower-alpha",
            Self::UpperAlpha => "upper-alpha",
            Self::LowerRoman => "lower-roman",
            Self::UpperRoman => "upper-roman",
            Self::Circle => "circle",
            Self::DecimalParen => "decimal-paren",
            Self::DecimalParenHalf => "decimal-paren-half",
            Self::ChineseParen => "chinese-paren",
            Self::LowerAlphaParen => "lower-alpha-paren",
            Self::UpperAlphaParen => "upper-alpha-paren",
            Self::LowerRomanParen => "lower-roman-paren",
            Self::UpperRomanParen => "upper-roman-paren",
            Self::DecimalBrace => "decimal-brace",
            Self::ChapterChinese => "chapter-chinese",
            Self::SectionChinese => "section-chinese",
            Self::SubsectionChinese => "subsection-chinese",
        }
    }

    /// Sample rendering shown next to the key in listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Decimal => "1, 2, 3",
            Self::Chinese => "一、二、三",
            Self::LowerAlpha => "a, b, c",
            Self::UpperAlpha => "A, B, C",
            Self::LowerRoman => "i, ii, iii",
            Self::UpperRoman => "I, II, III",
            Self::Circle => "①, ②, ③",
            Self::DecimalParen => "（1）,（2）",
            Self::DecimalParenHalf => "(1), (2)",
            Self::ChineseParen => "（一）,（二）",
            Self::LowerAlphaParen => "（a）,（b）",
            Self::UpperAlphaParen => "（A）,（B）",
            Self::LowerRomanParen => "（i）,（ii）",
            Self::UpperRomanParen => "（I）,（II）",
            Self::DecimalBrace => "{1}, {2}",
            Self::ChapterChinese => "第一章, 第二章",
            Self::SectionChinese => "第一节, 第二节",
            Self::SubsectionChinese => "第一条, 第二条",
        }
    }

    /// Whether the style denotes a legal unit (chapter, section or subsection).
    ///
    /// Legal units always collapse to their own digit group when only the last
    /// level is shown, even for a top-level heading.
    #[must_use]
    pub fn is_legal_unit(self) -> bool {
        matches!(
            self,
            Self::ChapterChinese | Self::SectionChinese | Self::SubsectionChinese
        )
    }

    /// Render a counter value in this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdheadnum::NumeralStyle;
    ///
    /// assert_eq!(NumeralStyle::UpperRoman.render(14), "XIV");
    /// assert_eq!(NumeralStyle::ChapterChinese.render(3), "第三章");
    /// ```
    #[must_use]
    pub fn render(self, n: usize) -> String {
        match self {
            Self::Decimal => n.to_string(),
            Self::Chinese => to_chinese(n),
            Self::LowerAlpha => to_alpha(n).to_lowercase(),
            Self::UpperAlpha => to_alpha(n),
            Self::LowerRoman => to_roman(n).to_lowercase(),
            Self::UpperRoman => to_roman(n),
            Self::Circle => to_circled(n),
            Self::DecimalParen => format!("（{n}）"),
            Self::DecimalParenHalf => format!("({n})"),
            Self::ChineseParen => format!("（{}）", to_chinese(n)),
            Self::LowerAlphaParen => format!("（{}）", to_alpha(n).to_lowercase()),
            Self::UpperAlphaParen => format!("（{}）", to_alpha(n)),
            Self::LowerRomanParen => format!("（{}）", to_roman(n).to_lowercase()),
            Self::UpperRomanParen => format!("（{}）", to_roman(n)),
            Self::DecimalBrace => format!("{{{n}}}"),
            Self::ChapterChinese => format!("第{}章", to_chinese(n)),
            Self::SectionChinese => format!("第{}节", to_chinese(n)),
            Self::SubsectionChinese => format!("第{}条", to_chinese(n)),
        }
    }
}

impl fmt::Display for NumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a style key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown numeral style `{0}`")]
pub struct UnknownStyle(pub String);

impl FromStr for NumeralStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.key() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Spell `n` with Chinese numerals.
///
/// Zero groups between non-zero ones collapse into a single `零`, trailing
/// zeros are dropped and a leading `一十` shortens to `十`.
///
/// # Examples
///
/// ```
/// use mdheadnum::numerals::to_chinese;
///
/// assert_eq!(to_chinese(11), "十一");
/// assert_eq!(to_chinese(1001), "一千零一");
/// ```
#[must_use]
pub fn to_chinese(n: usize) -> String {
    if n == 0 {
        return "零".to_string();
    }
    if n > CHINESE_MAX {
        return n.to_string();
    }

    let groups = [
        (n / 10_000, Some('万')),
        (n / 1000 % 10, Some('千')),
        (n / 100 % 10, Some('百')),
        (n / 10 % 10, Some('十')),
        (n % 10, None),
    ];

    let mut out = String::new();
    let mut pending_zero = false;
    for (digit, unit) in groups {
        if digit == 0 {
            pending_zero = !out.is_empty();
            continue;
        }
        if pending_zero {
            out.push('零');
            pending_zero = false;
        }
        let bare_ten = digit == 1 && unit == Some('十') && out.is_empty();
        if !bare_ten {
            out.push(CHINESE_DIGITS[digit]);
        }
        if let Some(unit) = unit {
            out.push(unit);
        }
    }
    out
}

/// Render `n` as a bijective base-26 sequence of upper-case letters.
///
/// Zero has no letter form and renders as `A`.
#[must_use]
pub fn to_alpha(n: usize) -> String {
    let mut letters = Vec::new();
    let mut num = n;
    while num > 0 {
        num -= 1;
        letters.push(char::from(b'A' + u8::try_from(num % 26).unwrap_or(0)));
        num /= 26;
    }
    if letters.is_empty() {
        return "A".to_string();
    }
    letters.iter().rev().collect()
}

/// Render `n` as an upper-case Roman numeral; values outside 1–3999 fall back
/// to decimal digits.
#[must_use]
pub fn to_roman(n: usize) -> String {
    if !(1..=3999).contains(&n) {
        return n.to_string();
    }
    let mut num = n;
    let mut out = String::new();
    for &(value, symbol) in ROMAN_TABLE {
        while num >= value {
            out.push_str(symbol);
            num -= value;
        }
    }
    out
}

/// Render `n` as a circled digit (①–⑳), or `(n)` outside that range.
#[must_use]
pub fn to_circled(n: usize) -> String {
    match n.checked_sub(1).and_then(|idx| CIRCLED.get(idx)) {
        Some(glyph) => glyph.to_string(),
        None => format!("({n})"),
    }
}
