//! End-to-end conversion: text to blocks to cards to rows.

use std::io::{Read, Write};

use crate::builders;
use crate::classifier::classify;
use crate::emitter;
use crate::error::{Error, Result};
use crate::segmenter::segment;
use crate::types::{Card, ConversionSummary, ConvertOptions};

/// Cards from one document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub cards: Vec<Card>,
    pub summary: ConversionSummary,
}

/// Convert markdown content into cards.
pub fn convert(content: &str, options: &ConvertOptions) -> Conversion {
    let blocks = segment(content);
    let classification = classify(&blocks, options);

    let mut conversion = Conversion::default();
    conversion.summary.skipped = classification.skipped;

    for span in &classification.spans {
        match builders::build(span, &options.tags) {
            Some(card) => {
                conversion.summary.record(span.rule());
                conversion.cards.push(card);
            }
            None => conversion.summary.skipped += 1,
        }
    }

    tracing::debug!(
        blocks = blocks.len(),
        cards = conversion.cards.len(),
        skipped = conversion.summary.skipped,
        "converted document"
    );
    conversion
}

/// Convert markdown content straight to delimited text.
pub fn convert_to_string(content: &str, options: &ConvertOptions) -> Result<String> {
    let conversion = convert(content, options);
    emitter::render(&conversion.cards, options.effective_delimiter())
}

/// Read a whole UTF-8 document, naming `origin` in errors.
pub fn read_document<R: Read>(reader: &mut R, origin: &str) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| Error::InputUnreadable {
            origin: origin.to_string(),
            source,
        })?;
    Ok(content)
}

/// Write cards as delimited rows, naming `target` in errors.
pub fn write_document<W: Write>(
    writer: &mut W,
    cards: &[Card],
    options: &ConvertOptions,
    target: &str,
) -> Result<()> {
    emitter::write_rows(writer, cards, options.effective_delimiter(), target)
}
