use std::path::PathBuf;

use clap::Parser;
use flashcard_core::{ConvertOptions, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "md-to-anki", version)]
#[command(about = "Convert markdown notes to Anki-importable CSV/TSV", long_about = None)]
pub struct Cli {
    /// Markdown file to read (`-` for stdin)
    pub input: PathBuf,

    /// File to write (stdout when omitted or `-`)
    pub output: Option<PathBuf>,

    /// Output format; tsv switches the default delimiter to tab
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Field delimiter, overriding the format's default (`\t` for tab)
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<char>,

    /// Tags to add to every card (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Turn every paragraph with bold or code spans into a cloze card
    #[arg(long)]
    pub cloze: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            format: self.format,
            delimiter: self.delimiter,
            force_cloze: self.cloze,
            ..Default::default()
        }
        .with_tags(&self.tags)
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        (self.input.as_os_str() != "-").then_some(&self.input)
    }

    /// Output path, or `None` for stdout.
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.output.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown format '{}', expected csv or tsv", s))
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    if s == "\\t" || s.eq_ignore_ascii_case("tab") {
        return Ok('\t');
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("delimiter must be a single character, got '{}'", s)),
    }
}
