//! Numbering configuration: one numeral style and separator per heading depth.
//!
//! The JSON form uses camel-case keys with one object per depth:
//!
//! ```json
//! {
//!   "onlyLastLevel": false,
//!   "level1": { "format": "chapter-chinese", "separator": "" },
//!   "level2": { "format": "section-chinese", "separator": "、" }
//! }
//! ```
//!
//! Missing keys fall back to [`NumberingConfig::default`] one key at a time.
//! Unknown format keys degrade to `none` for that depth with a warning rather
//! than rejecting the whole file.

use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    heading::MAX_DEPTH,
    numerals::NumeralStyle,
};

/// Format key meaning "no number at this depth".
pub const NONE_KEY: &str = "none";

/// Numbering settings for a single heading depth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawLevel", into = "RawLevel")]
pub struct LevelConfig {
    /// `None` renders no number and removes typed ones.
    pub style: Option<NumeralStyle>,
    /// Inserted between the rendered number and the title.
    pub separator: String,
}

impl LevelConfig {
    #[must_use]
    pub fn new(style: Option<NumeralStyle>, separator: impl Into<String>) -> Self {
        Self {
            style,
            separator: separator.into(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct RawLevel {
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    separator: Option<String>,
}

impl From<RawLevel> for LevelConfig {
    fn from(raw: RawLevel) -> Self {
        Self {
            style: raw.format.as_deref().and_then(parse_format_key),
            separator: raw.separator.unwrap_or_default(),
        }
    }
}

impl From<LevelConfig> for RawLevel {
    fn from(level: LevelConfig) -> Self {
        Self {
            format: Some(level.style.map_or(NONE_KEY, NumeralStyle::key).to_string()),
            separator: Some(level.separator),
        }
    }
}

/// Resolve a format key, treating `none`, the empty string and unknown keys as
/// no numbering.
fn parse_format_key(key: &str) -> Option<NumeralStyle> {
    if key.is_empty() || key == NONE_KEY {
        return None;
    }
    match key.parse() {
        Ok(style) => Some(style),
        Err(err) => {
            log::warn!("{err}; treating it as `{NONE_KEY}`");
            None
        }
    }
}

/// Settings for one renumbering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConfig", into = "RawConfig")]
pub struct NumberingConfig {
    /// Show only the heading's own digit group instead of the dotted path.
    pub only_last_level: bool,
    /// Leave heading-like lines inside fenced code blocks alone.
    pub skip_code_fences: bool,
    /// Settings for depths 1 through 6.
    pub levels: [LevelConfig; MAX_DEPTH],
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            only_last_level: false,
            skip_code_fences: false,
            levels: [
                LevelConfig::new(Some(NumeralStyle::ChapterChinese), ""),
                LevelConfig::new(Some(NumeralStyle::SectionChinese), "、"),
                LevelConfig::new(Some(NumeralStyle::DecimalParen), " "),
                LevelConfig::default(),
                LevelConfig::default(),
                LevelConfig::default(),
            ],
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    only_last_level: bool,
    skip_code_fences: bool,
    level1: LevelConfig,
    level2: LevelConfig,
    level3: LevelConfig,
    level4: LevelConfig,
    level5: LevelConfig,
    level6: LevelConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        NumberingConfig::default().into()
    }
}

impl From<RawConfig> for NumberingConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            only_last_level: raw.only_last_level,
            skip_code_fences: raw.skip_code_fences,
            levels: [
                raw.level1, raw.level2, raw.level3, raw.level4, raw.level5, raw.level6,
            ],
        }
    }
}

impl From<NumberingConfig> for RawConfig {
    fn from(config: NumberingConfig) -> Self {
        let [level1, level2, level3, level4, level5, level6] = config.levels;
        Self {
            only_last_level: config.only_last_level,
            skip_code_fences: config.skip_code_fences,
            level1,
            level2,
            level3,
            level4,
            level5,
            level6,
        }
    }
}

impl NumberingConfig {
    /// A configuration that numbers nothing, used to strip every heading number.
    #[must_use]
    pub fn none() -> Self {
        Self {
            only_last_level: false,
            skip_code_fences: false,
            levels: Default::default(),
        }
    }

    /// Settings for `depth` (1-based).
    #[must_use]
    pub fn level(&self, depth: usize) -> Option<&LevelConfig> {
        self.levels.get(depth.checked_sub(1)?)
    }

    /// Numeral style for `depth`, `None` when the depth is unnumbered.
    #[must_use]
    pub fn style(&self, depth: usize) -> Option<NumeralStyle> {
        self.level(depth).and_then(|level| level.style)
    }

    /// Separator for `depth`, empty when unset.
    #[must_use]
    pub fn separator(&self, depth: usize) -> &str {
        self.level(depth).map_or("", |level| level.separator.as_str())
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] when the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialise the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file, falling back to defaults when it does not
    /// exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write the configuration to `path` as JSON.
    ///
    /// # Errors
    /// Returns an error if serialisation or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json + "\n").map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the settings of one depth.
    pub fn apply(&mut self, level_override: &LevelOverride) {
        if let Some(slot) = level_override
            .depth
            .checked_sub(1)
            .and_then(|idx| self.levels.get_mut(idx))
        {
            slot.clone_from(&level_override.level);
        }
    }
}

/// A single-depth override written as `N=STYLE` or `N=STYLE:SEPARATOR`.
///
/// # Examples
///
/// ```
/// use mdheadnum::{LevelOverride, NumeralStyle};
///
/// let parsed: LevelOverride = "2=decimal-paren: ".parse().unwrap();
/// assert_eq!(parsed.depth, 2);
/// assert_eq!(parsed.level.style, Some(NumeralStyle::DecimalParen));
/// assert_eq!(parsed.level.separator, " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOverride {
    pub depth: usize,
    pub level: LevelConfig,
}

impl FromStr for LevelOverride {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| ConfigError::InvalidOverride {
            input: s.to_string(),
            reason,
        };
        let (depth, spec) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected N=STYLE[:SEPARATOR]".to_string()))?;
        let depth: usize = depth
            .trim()
            .parse()
            .map_err(|_| invalid(format!("`{depth}` is not a heading depth")))?;
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(invalid(format!("depth must be between 1 and {MAX_DEPTH}")));
        }
        let (key, separator) = spec.split_once(':').unwrap_or((spec, ""));
        let style = if key == NONE_KEY {
            None
        } else {
            Some(key.parse::<NumeralStyle>().map_err(|e| invalid(e.to_string()))?)
        };
        Ok(Self {
            depth,
            level: LevelConfig::new(style, separator),
        })
    }
}
