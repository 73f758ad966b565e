//! Command-line front end for flashcard-core.
//!
//! Reads one markdown document, converts it and writes the rows to a file or
//! stdout. The summary goes to stderr so piped output stays clean.

pub mod args;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use flashcard_core::emitter::check_delimiter;
use flashcard_core::{
    convert, read_document, write_document, Card, ConversionSummary, ConvertOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options();
    check_delimiter(options.effective_delimiter())?;

    let origin = display_name(cli.input_path().map(|p| p.as_path()), "<stdin>");
    let target = display_name(cli.output_path().map(|p| p.as_path()), "<stdout>");

    // Read everything before touching the output so a bad input leaves no file behind.
    let content = read_input(cli.input_path().map(|p| p.as_path()), &origin)?;
    tracing::info!("Read {} bytes from {}", content.len(), origin);

    let conversion = convert(&content, &options);
    write_output(cli.output_path().map(|p| p.as_path()), &conversion.cards, &options, &target)?;

    eprint!("{}", summary_report(&conversion.summary, &origin, &target));
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn display_name(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn read_input(path: Option<&Path>, origin: &str) -> anyhow::Result<String> {
    let content = match path {
        Some(path) => {
            let mut file =
                File::open(path).map_err(|source| flashcard_core::Error::InputUnreadable {
                    origin: origin.to_string(),
                    source,
                })?;
            read_document(&mut file, origin)?
        }
        None => read_document(&mut io::stdin().lock(), origin)?,
    };
    Ok(content)
}

fn write_output(
    path: Option<&Path>,
    cards: &[Card],
    options: &ConvertOptions,
    target: &str,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| flashcard_core::Error::OutputUnwritable {
                target: target.to_string(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_document(&mut writer, cards, options, target)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_document(&mut writer, cards, options, target)?;
            writer.flush().context("flushing stdout")?;
        }
    }
    tracing::info!(
        "Wrote {} {} rows to {}",
        cards.len(),
        options.format.as_str(),
        target
    );
    Ok(())
}

/// Human-readable summary, including which note type to import with.
pub fn summary_report(summary: &ConversionSummary, origin: &str, target: &str) -> String {
    let mut report = format!(
        "Converted {} cards from {} to {}\n",
        summary.total(),
        origin,
        target
    );
    report.push_str(&format!(
        "Sections: {}, bullets: {}, code: {}, cloze: {} (skipped blocks: {})\n",
        summary.sections, summary.bullets, summary.code, summary.cloze, summary.skipped
    ));

    let note = match (summary.basic_count(), summary.cloze) {
        (0, 0) => "Note: no cards were found",
        (_, 0) => "Note: Import this file with the Basic note type in Anki",
        (0, _) => "Note: Import this file with the Cloze note type in Anki",
        _ => "Note: This file mixes Basic and Cloze rows; import each with its matching note type",
    };
    report.push_str(note);
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report_for(content: &str) -> String {
        let summary = convert(content, &ConvertOptions::default()).summary;
        summary_report(&summary, "a", "b")
    }

    #[test]
    fn basic_report() {
        let summary = convert("## Q\nA", &ConvertOptions::default()).summary;
        assert_eq!(
            summary_report(&summary, "notes.md", "cards.csv"),
            "Converted 1 cards from notes.md to cards.csv\n\
             Sections: 1, bullets: 0, code: 0, cloze: 0 (skipped blocks: 0)\n\
             Note: Import this file with the Basic note type in Anki\n"
        );
    }

    #[test]
    fn cloze_report() {
        let report = report_for("A **stack** is LIFO.");
        assert!(report.ends_with("Note: Import this file with the Cloze note type in Anki\n"));
    }

    #[test]
    fn mixed_report() {
        let report = report_for("## Q\nA\n\nSee `ls`.");
        assert!(report.contains("mixes Basic and Cloze"));
    }

    #[test]
    fn empty_report() {
        let report = report_for("plain");
        assert!(report.starts_with("Converted 0 cards"));
        assert!(report.contains("no cards were found"));
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(display_name(None, "<stdin>"), "<stdin>");
        assert_eq!(display_name(Some(Path::new("x.md")), "<stdin>"), "x.md");
    }
}
