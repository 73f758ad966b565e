//! Card builders, one per classification rule.

pub mod bullet;
pub mod cloze;
pub mod code;
pub mod section;

use crate::classifier::Classified;
use crate::types::{Card, Rule};

/// Trait for turning a classified span into a card.
pub trait CardBuilder: Send + Sync {
    /// Rule this builder serves.
    fn rule(&self) -> Rule;

    /// Build a card from a span of this builder's rule.
    ///
    /// Returns `None` when the span belongs to another rule or the resulting
    /// card would have an empty field.
    fn build(&self, span: &Classified<'_>, tags: &[String]) -> Option<Card>;
}

/// Get the builder for a rule.
pub fn builder_for(rule: Rule) -> &'static dyn CardBuilder {
    match rule {
        Rule::Section => &section::SectionCardBuilder,
        Rule::Bullet => &bullet::BulletListCardBuilder,
        Rule::Code => &code::CodeBlockCardBuilder,
        Rule::Cloze => &cloze::ClozeCardBuilder,
    }
}

/// Build a card for a span with the builder registered for its rule.
pub fn build(span: &Classified<'_>, tags: &[String]) -> Option<Card> {
    builder_for(span.rule()).build(span, tags)
}

/// Basic card if both fields are non-blank.
fn basic(front: String, back: String, tags: &[String]) -> Option<Card> {
    if front.trim().is_empty() || back.trim().is_empty() {
        tracing::debug!(%front, "dropping card with an empty field");
        return None;
    }
    Some(Card::Basic {
        front,
        back,
        tags: tags.to_vec(),
    })
}
