//! Bullet cards: a top-level bullet and its sub-bullets.

use super::{basic, CardBuilder};
use crate::classifier::Classified;
use crate::types::{Card, Rule};

/// Front is the bullet text; back is every descendant, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulletListCardBuilder;

impl CardBuilder for BulletListCardBuilder {
    fn rule(&self) -> Rule {
        Rule::Bullet
    }

    fn build(&self, span: &Classified<'_>, tags: &[String]) -> Option<Card> {
        let Classified::Bullet { item } = span else {
            return None;
        };

        // Deeper levels are flattened into the back, depth-first.
        let back = item.descendant_texts().join("\n");
        basic(item.text.clone(), back, tags)
    }
}
