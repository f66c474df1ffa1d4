use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::Parser;
use mdheadnum::{
    LevelOverride, NumberingConfig, NumeralStyle, correct_headings, preview_headings,
    process::DEFAULT_PREVIEW_LEN, rewrite,
};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Renumber Markdown headings")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes independent switches"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// JSON numbering configuration; defaults apply when the file is absent
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Show only each heading's own number instead of the dotted path
    #[arg(long = "only-last-level")]
    only_last_level: bool,
    /// Override one depth, e.g. `2=decimal-paren: ` (repeatable)
    #[arg(long = "level", value_name = "N=STYLE[:SEP]")]
    levels: Vec<LevelOverride>,
    /// Remove every heading number instead of renumbering
    #[arg(long = "remove", conflicts_with_all = ["only_last_level", "levels"])]
    remove: bool,
    /// Print the first renumbered headings instead of the document
    #[arg(long = "preview", conflicts_with = "in_place")]
    preview: bool,
    /// Leave heading-like lines inside fenced code blocks alone
    #[arg(long = "skip-fences")]
    skip_fences: bool,
    /// Write the effective configuration to PATH and exit
    #[arg(long = "save-config", value_name = "PATH")]
    save_config: Option<PathBuf>,
    /// List the available numeral styles and exit
    #[arg(long = "list-styles")]
    list_styles: bool,
    /// Markdown files to renumber
    files: Vec<PathBuf>,
}

impl Cli {
    fn numbering_config(&self) -> anyhow::Result<NumberingConfig> {
        let mut config = match &self.config {
            Some(path) => NumberingConfig::load_or_default(path)?,
            None => NumberingConfig::default(),
        };
        if self.remove {
            let skip = config.skip_code_fences;
            config = NumberingConfig::none();
            config.skip_code_fences = skip;
        }
        config.only_last_level |= self.only_last_level;
        config.skip_code_fences |= self.skip_fences;
        for level in &self.levels {
            config.apply(level);
        }
        Ok(config)
    }
}

fn render(text: &str, config: &NumberingConfig, preview: bool) -> String {
    if !preview {
        return correct_headings(text, config);
    }
    let lines = preview_headings(text, config, DEFAULT_PREVIEW_LEN);
    if lines.is_empty() {
        "(no headings found)\n".to_string()
    } else {
        lines.join("\n") + "\n"
    }
}

fn process_path(path: &Path, config: &NumberingConfig, cli: &Cli) -> anyhow::Result<String> {
    if cli.in_place {
        rewrite(path, config).with_context(|| format!("failed to rewrite {}", path.display()))?;
        log::info!("renumbered {}", path.display());
        return Ok(String::new());
    }
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(render(&text, config, cli.preview))
}

fn print_styles() {
    println!("none\t(no number)");
    for style in NumeralStyle::ALL {
        println!("{}\t{}", style.key(), style.label());
    }
}

/// Entry point for the heading renumbering tool.
///
/// Reads standard input when no files are given, otherwise renumbers each file
/// in parallel and prints the results in argument order (or rewrites them with
/// `--in-place`). A file that fails is reported on stderr after the others
/// are handled, and the process exits with an error.
///
/// # Examples
///
/// ```sh
/// # Renumber with the default Chinese legal styles
/// mdheadnum notes.md
///
/// # Dotted decimal numbers, rewriting in place
/// mdheadnum --level 1=decimal:. --level 2=decimal:" " --in-place notes.md
///
/// # Strip all heading numbers from standard input
/// cat notes.md | mdheadnum --remove
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list_styles {
        print_styles();
        return Ok(());
    }

    let config = cli.numbering_config()?;

    if let Some(path) = &cli.save_config {
        config.save(path)?;
        log::info!("saved configuration to {}", path.display());
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", render(&input, &config, cli.preview));
        return Ok(());
    }

    let results: Vec<_> = cli
        .files
        .par_iter()
        .map(|path| process_path(path, &config, &cli))
        .collect();

    let mut failures = 0;
    for result in results {
        match result {
            Ok(out) => print!("{out}"),
            Err(err) => {
                eprintln!("{err:#}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} file(s) could not be processed");
    }
    Ok(())
}
