//! Section cards: a level-2 header and the block that answers it.

use super::{basic, CardBuilder};
use crate::classifier::{Answer, Classified};
use crate::inline::strip_markup;
use crate::types::{Card, Rule};

/// Front is the header with inline markup removed; back is the answer block.
///
/// A bulleted answer contributes its top-level items only, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionCardBuilder;

impl CardBuilder for SectionCardBuilder {
    fn rule(&self) -> Rule {
        Rule::Section
    }

    fn build(&self, span: &Classified<'_>, tags: &[String]) -> Option<Card> {
        let Classified::Section { header, answer } = span else {
            return None;
        };

        let front = strip_markup(header).trim().to_string();
        let back = match answer {
            Answer::Paragraph(text) => text.to_string(),
            Answer::Bullets(items) => items
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        };
        basic(front, back, tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BulletItem;

    fn build(span: Classified<'_>) -> Option<Card> {
        SectionCardBuilder.build(&span, &["a".to_string(), "b".to_string()])
    }

    #[test]
    fn paragraph_answer_is_verbatim() {
        let card = build(Classified::Section {
            header: "What is X?",
            answer: Answer::Paragraph("X is **Y**.\nReally."),
        });
        assert_eq!(
            card,
            Some(Card::Basic {
                front: "What is X?".to_string(),
                back: "X is **Y**.\nReally.".to_string(),
                tags: vec!["a".to_string(), "b".to_string()],
            })
        );
    }

    #[test]
    fn header_markup_is_stripped() {
        let card = build(Classified::Section {
            header: "What does `len` return?",
            answer: Answer::Paragraph("A count."),
        });
        assert!(
            matches!(card, Some(Card::Basic { front, .. }) if front == "What does len return?")
        );
    }

    #[test]
    fn arithmetic_header_keeps_its_stars() {
        let card = build(Classified::Section {
            header: "Is 2 * 3 * 4 = 24?",
            answer: Answer::Paragraph("Yes."),
        });
        assert!(matches!(card, Some(Card::Basic { front, .. }) if front == "Is 2 * 3 * 4 = 24?"));
    }

    #[test]
    fn bullet_answer_joins_top_level_items() {
        let mut first = BulletItem::new("first");
        first.children.push(BulletItem::new("hidden"));
        let items = vec![first, BulletItem::new("second")];
        let card = build(Classified::Section {
            header: "List",
            answer: Answer::Bullets(&items),
        });
        assert!(matches!(card, Some(Card::Basic { back, .. }) if back == "first\nsecond"));
    }

    #[test]
    fn empty_header_is_dropped() {
        let card = build(Classified::Section {
            header: "  ",
            answer: Answer::Paragraph("answer"),
        });
        assert!(card.is_none());
    }
}
