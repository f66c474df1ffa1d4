//! File helpers for renumbering Markdown documents.

use std::{fs, path::Path};

use crate::{config::NumberingConfig, process::correct_headings};

/// Renumber the headings of a file in place.
///
/// The file is only written after the whole document has been corrected, so a
/// failed read leaves it untouched.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, config: &NumberingConfig) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let fixed = correct_headings(&text, config);
    if fixed == text {
        log::debug!("{} already numbered", path.display());
        return Ok(());
    }
    fs::write(path, fixed)
}
