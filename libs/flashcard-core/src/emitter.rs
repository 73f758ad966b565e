//! Serializes cards into delimited-text rows.
//!
//! Basic cards become `front, back[, tags]` and cloze cards `text[, tags]`;
//! the tags field is left out entirely when no tags are configured. Fields
//! holding the delimiter, a double quote, `\n` or `\r` are quoted with inner
//! quotes doubled. Each row ends with a single `\n` and there is no
//! header row.

use std::io::Write;

use crate::error::{Error, Result};
use crate::types::Card;

/// One output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub fields: Vec<String>,
    pub delimiter: char,
}

impl OutputRow {
    pub fn from_card(card: &Card, delimiter: char) -> Self {
        let mut fields = match card {
            Card::Basic { front, back, .. } => vec![front.clone(), back.clone()],
            Card::Cloze { text, .. } => vec![text.clone()],
        };
        if !card.tags().is_empty() {
            fields.push(card.tags().join(" "));
        }
        Self { fields, delimiter }
    }

    /// The row with its terminating newline.
    pub fn render(&self) -> String {
        let mut line = self
            .fields
            .iter()
            .map(|field| quote_field(field, self.delimiter))
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string());
        line.push('\n');
        line
    }
}

/// Reject delimiters that quoting cannot protect.
pub fn check_delimiter(delimiter: char) -> Result<char> {
    match delimiter {
        '"' | '\n' | '\r' => Err(Error::InvalidDelimiter(delimiter)),
        _ => Ok(delimiter),
    }
}

/// Quote a field if it needs it.
pub fn quote_field(field: &str, delimiter: char) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render every card, one row each.
pub fn render(cards: &[Card], delimiter: char) -> Result<String> {
    let delimiter = check_delimiter(delimiter)?;
    Ok(cards
        .iter()
        .map(|card| OutputRow::from_card(card, delimiter).render())
        .collect())
}

/// Write every card to `writer`, naming `target` in errors.
///
/// Rows already written stay written if a later write fails.
pub fn write_rows<W: Write>(
    writer: &mut W,
    cards: &[Card],
    delimiter: char,
    target: &str,
) -> Result<()> {
    let delimiter = check_delimiter(delimiter)?;
    let unwritable = |source| Error::OutputUnwritable {
        target: target.to_string(),
        source,
    };

    for card in cards {
        let row = OutputRow::from_card(card, delimiter).render();
        writer.write_all(row.as_bytes()).map_err(unwritable)?;
    }
    writer.flush().map_err(unwritable)?;

    tracing::debug!(rows = cards.len(), output = target, "wrote rows");
    Ok(())
}
