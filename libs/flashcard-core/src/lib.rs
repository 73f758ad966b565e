//! Converts markdown notes into flashcard rows for spaced-repetition import.
//!
//! Provides:
//! - Segmenter splitting markdown into headers, paragraphs, bullet lists and fenced code
//! - Classifier picking one card rule per block with fixed precedence
//! - Card builders for section, bullet, code and cloze cards
//! - Emitter writing delimited text with standard quoting
//!
//! ```
//! use flashcard_core::{convert_to_string, ConvertOptions};
//!
//! let out = convert_to_string("## What is X?\nX is Y.\n", &ConvertOptions::default()).unwrap();
//! assert_eq!(out, "What is X?,X is Y.\n");
//! ```

pub mod builders;
pub mod classifier;
pub mod emitter;
pub mod error;
pub mod inline;
pub mod pipeline;
pub mod segmenter;
pub mod types;

pub use builders::{builder_for, CardBuilder};
pub use classifier::{classify, Classification, Classified};
pub use emitter::{OutputRow, quote_field};
pub use error::{Error, Result};
pub use pipeline::{convert, convert_to_string, read_document, write_document, Conversion};
pub use segmenter::segment;
pub use types::{
    Block, BulletItem, Card, ConversionSummary, ConvertOptions, OutputFormat, Rule,
};
