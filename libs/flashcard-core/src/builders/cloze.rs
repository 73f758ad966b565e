//! Cloze cards: bold and inline-code spans become deletions.

use super::CardBuilder;
use crate::classifier::Classified;
use crate::inline::{highlights, Span};
use crate::types::{Card, Rule};

/// One deletion within a card, numbered from 1 in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeMarker<'a> {
    pub index: usize,
    pub span: Span<'a>,
}

impl ClozeMarker<'_> {
    /// The `{{cN::text}}` token replacing the span.
    pub fn token(&self) -> String {
        format!("{{{{c{}::{}}}}}", self.index, self.span.inner)
    }
}

/// Numbering for the markers of a single card.
#[derive(Debug, Default)]
struct ClozeCounter(usize);

impl ClozeCounter {
    fn next(&mut self) -> usize {
        self.0 += 1;
        self.0
    }
}

/// Markers for every bold or inline-code span in `text`, left to right.
pub fn markers(text: &str) -> Vec<ClozeMarker<'_>> {
    let mut counter = ClozeCounter::default();
    highlights(text)
        .into_iter()
        .map(|span| ClozeMarker {
            index: counter.next(),
            span,
        })
        .collect()
}

/// One cloze card per paragraph holding all of its markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClozeCardBuilder;

impl CardBuilder for ClozeCardBuilder {
    fn rule(&self) -> Rule {
        Rule::Cloze
    }

    fn build(&self, span: &Classified<'_>, tags: &[String]) -> Option<Card> {
        let Classified::Cloze { text } = span else {
            return None;
        };

        let markers = markers(text);
        if markers.is_empty() || text.trim().is_empty() {
            return None;
        }

        let mut out = String::with_capacity(text.len() + markers.len() * 8);
        let mut last = 0;
        for marker in &markers {
            out.push_str(&text[last..marker.span.range.start]);
            out.push_str(&marker.token());
            last = marker.span.range.end;
        }
        out.push_str(&text[last..]);

        Some(Card::Cloze {
            text: out,
            tags: tags.to_vec(),
        })
    }
}
