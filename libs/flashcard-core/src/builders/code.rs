//! Code cards: "what does this code do?" for fenced code blocks.

use super::CardBuilder;
use crate::classifier::{Classified, CodeContext};
use crate::inline::strip_markup;
use crate::types::{Card, Rule};

/// Front asks about the code and shows it; back is the description.
///
/// The placeholder under the question is the fenced block reproduced in full
/// (fence, language tag, body, closing fence). The back is the first sentence
/// of the preceding paragraph, the preceding header when there is no
/// paragraph, and empty otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockCardBuilder;

impl CardBuilder for CodeBlockCardBuilder {
    fn rule(&self) -> Rule {
        Rule::Code
    }

    fn build(&self, span: &Classified<'_>, tags: &[String]) -> Option<Card> {
        let Classified::Code {
            language,
            body,
            context,
        } = span
        else {
            return None;
        };

        let language = language.unwrap_or("");
        let front = format!(
            "What does this {} code do?\n{}",
            language,
            code_placeholder(language, body)
        );
        let back = match context {
            CodeContext::Paragraph(text) => first_sentence(text).to_string(),
            CodeContext::Header(text) => strip_markup(text).trim().to_string(),
            CodeContext::None => String::new(),
        };

        // The back may legitimately be empty here; the code is the card.
        Some(Card::Basic {
            front,
            back,
            tags: tags.to_vec(),
        })
    }
}

/// The fenced block as it appears on the card front.
pub fn code_placeholder(language: &str, body: &str) -> String {
    format!("```{}\n{}\n```", language, body)
}

/// Text up to and including the first `.`, `!` or `?` that ends a sentence.
///
/// Punctuation only ends a sentence when followed by whitespace or the end of
/// the text, so `v1.2` or `e.g.x` do not split. Without any, the whole text is
/// returned.
pub fn first_sentence(text: &str) -> &str {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if matches!(c, '.' | '!' | '?') && at_boundary {
            return &text[..i + c.len_utf8()];
        }
    }
    text
}
