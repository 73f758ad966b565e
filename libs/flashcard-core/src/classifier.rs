//! Decides which card rule applies to each block.
//!
//! Rules are tried in a fixed order at every position and the first match
//! wins. A match may consume more than one block (a header and its answer, a
//! paragraph and the code it describes); blocks no rule claims are skipped.

use crate::inline::highlights;
use crate::types::{Block, BulletItem, ConvertOptions, Rule};

/// Answer block of a section card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Paragraph(&'a str),
    Bullets(&'a [BulletItem]),
}

/// Where a code card takes its back field from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeContext<'a> {
    Paragraph(&'a str),
    Header(&'a str),
    None,
}

/// A block (or run of blocks) tagged with the rule that will build it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    Section {
        header: &'a str,
        answer: Answer<'a>,
    },
    Bullet {
        item: &'a BulletItem,
    },
    Code {
        language: Option<&'a str>,
        body: &'a str,
        context: CodeContext<'a>,
    },
    Cloze {
        text: &'a str,
    },
}

impl Classified<'_> {
    pub fn rule(&self) -> Rule {
        match self {
            Self::Section { .. } => Rule::Section,
            Self::Bullet { .. } => Rule::Bullet,
            Self::Code { .. } => Rule::Code,
            Self::Cloze { .. } => Rule::Cloze,
        }
    }
}

/// Classified spans in document order plus the number of blocks skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub spans: Vec<Classified<'a>>,
    pub skipped: usize,
}

struct Matched<'a> {
    spans: Vec<Classified<'a>>,
    consumed: usize,
}

impl<'a> Matched<'a> {
    fn one(span: Classified<'a>, consumed: usize) -> Self {
        Self {
            spans: vec![span],
            consumed,
        }
    }

    /// Claim blocks without producing a card.
    fn absorb(consumed: usize) -> Self {
        Self {
            spans: Vec::new(),
            consumed,
        }
    }
}

type Matcher = for<'a, 'b> fn(&'b Classifier<'a>, usize) -> Option<Matched<'a>>;

const RULES: [(Rule, Matcher); 4] = [
    (Rule::Section, match_section),
    (Rule::Bullet, match_bullets),
    (Rule::Code, match_code),
    (Rule::Cloze, match_cloze),
];

struct Classifier<'a> {
    blocks: &'a [Block],
    force_cloze: bool,
}

/// Classify blocks in document order.
pub fn classify<'a>(blocks: &'a [Block], options: &ConvertOptions) -> Classification<'a> {
    let classifier = Classifier {
        blocks,
        force_cloze: options.force_cloze,
    };
    classifier.run()
}

impl<'a> Classifier<'a> {
    fn run(&self) -> Classification<'a> {
        let mut result = Classification::default();
        let mut at = 0;

        while at < self.blocks.len() {
            let matched = RULES.iter().find_map(|(rule, matcher)| {
                let matched = matcher(self, at)?;
                tracing::trace!(block = at, rule = rule.as_str(), "rule matched");
                Some(matched)
            });

            match matched {
                Some(matched) => {
                    if matched.spans.is_empty() {
                        tracing::debug!(block = at, "block claimed without a card");
                        result.skipped += matched.consumed;
                    }
                    result.spans.extend(matched.spans);
                    at += matched.consumed.max(1);
                }
                None => {
                    tracing::debug!(block = at, "no rule matched, skipping block");
                    result.skipped += 1;
                    at += 1;
                }
            }
        }

        result
    }

    fn get(&self, at: usize) -> Option<&'a Block> {
        self.blocks.get(at)
    }
}

fn match_section<'a>(cx: &Classifier<'a>, at: usize) -> Option<Matched<'a>> {
    let Some(Block::Header { level: 2, text }) = cx.get(at) else {
        return None;
    };

    let matched = match cx.get(at + 1) {
        Some(Block::Paragraph(p)) if cx.force_cloze && !highlights(p).is_empty() => {
            Matched::absorb(1)
        }
        Some(Block::Paragraph(p)) => Matched::one(
            Classified::Section {
                header: text,
                answer: Answer::Paragraph(p),
            },
            2,
        ),
        Some(Block::BulletList(items)) => Matched::one(
            Classified::Section {
                header: text,
                answer: Answer::Bullets(items),
            },
            2,
        ),
        // A following code block picks the header up as its context.
        _ => Matched::absorb(1),
    };
    Some(matched)
}

fn match_bullets<'a>(cx: &Classifier<'a>, at: usize) -> Option<Matched<'a>> {
    let Some(Block::BulletList(items)) = cx.get(at) else {
        return None;
    };

    let spans: Vec<_> = items
        .iter()
        .filter(|item| !item.children.is_empty())
        .map(|item| Classified::Bullet { item })
        .collect();

    if spans.is_empty() {
        return None;
    }
    Some(Matched { spans, consumed: 1 })
}

fn match_code<'a>(cx: &Classifier<'a>, at: usize) -> Option<Matched<'a>> {
    match (cx.get(at), cx.get(at + 1)) {
        (Some(Block::Paragraph(p)), Some(Block::FencedCode { language, body })) => {
            Some(Matched::one(
                Classified::Code {
                    language: language.as_deref(),
                    body,
                    context: CodeContext::Paragraph(p),
                },
                2,
            ))
        }
        (Some(Block::FencedCode { language, body }), _) => {
            let context = match at.checked_sub(1).and_then(|prev| cx.get(prev)) {
                Some(Block::Header { level: 2, text }) => CodeContext::Header(text),
                _ => CodeContext::None,
            };
            Some(Matched::one(
                Classified::Code {
                    language: language.as_deref(),
                    body,
                    context,
                },
                1,
            ))
        }
        _ => None,
    }
}

fn match_cloze<'a>(cx: &Classifier<'a>, at: usize) -> Option<Matched<'a>> {
    let Some(Block::Paragraph(text)) = cx.get(at) else {
        return None;
    };

    if text.starts_with('#') || highlights(text).is_empty() {
        return None;
    }
    Some(Matched::one(Classified::Cloze { text }, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;
    use pretty_assertions::assert_eq;

    fn classify_rules(content: &str, options: &ConvertOptions) -> (Vec<Rule>, usize) {
        let blocks = segment(content);
        let classification = classify(&blocks, options);
        let rules = classification.spans.iter().map(Classified::rule).collect();
        (rules, classification.skipped)
    }

    #[test]
    fn header_with_paragraph_is_section() {
        let blocks = segment("## Q\nA.");
        let classification = classify(&blocks, &ConvertOptions::default());
        assert_eq!(
            classification.spans,
            vec![Classified::Section {
                header: "Q",
                answer: Answer::Paragraph("A."),
            }]
        );
    }

    #[test]
    fn header_with_bullets_beats_cloze() {
        let content = "## Q\n- **bold** one\n  - child";
        let (rules, _) = classify_rules(content, &ConvertOptions::default());
        assert_eq!(rules, vec![Rule::Section]);
    }

    #[test]
    fn header_without_answer_is_skipped() {
        let (rules, skipped) =
            classify_rules("## Lonely\n\n## Also lonely", &ConvertOptions::default());
        assert!(rules.is_empty());
        assert_eq!(skipped, 2);
    }

    #[test]
    fn header_before_code_becomes_context() {
        let blocks = segment("## Reverse a list\n```py\nxs[::-1]\n```");
        let classification = classify(&blocks, &ConvertOptions::default());
        assert_eq!(
            classification.spans,
            vec![Classified::Code {
                language: Some("py"),
                body: "xs[::-1]",
                context: CodeContext::Header("Reverse a list"),
            }]
        );
        assert_eq!(classification.skipped, 1);
    }

    #[test]
    fn bullets_without_children_are_skipped() {
        let (rules, skipped) = classify_rules("- a\n- b", &ConvertOptions::default());
        assert!(rules.is_empty());
        assert_eq!(skipped, 1);
    }

    #[test]
    fn only_bullets_with_children_match() {
        let content = "- a\n  - a1\n- b\n- c\n  - c1";
        let (rules, _) = classify_rules(content, &ConvertOptions::default());
        assert_eq!(rules, vec![Rule::Bullet, Rule::Bullet]);
    }

    #[test]
    fn paragraph_before_code_is_context() {
        let blocks = segment("Does **Z**.\n```ruby\ncode\n```");
        let classification = classify(&blocks, &ConvertOptions::default());
        assert_eq!(
            classification.spans,
            vec![Classified::Code {
                language: Some("ruby"),
                body: "code",
                context: CodeContext::Paragraph("Does **Z**."),
            }]
        );
    }

    #[test]
    fn code_without_context() {
        let (rules, skipped) = classify_rules("```\nx\n```", &ConvertOptions::default());
        assert_eq!(rules, vec![Rule::Code]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn emphasised_paragraph_is_cloze() {
        let (rules, _) =
            classify_rules("A **stack** is LIFO.\n\nPlain prose.", &ConvertOptions::default());
        assert_eq!(rules, vec![Rule::Cloze]);
    }

    #[test]
    fn heading_like_paragraph_is_not_cloze() {
        let (rules, _) = classify_rules("# The **main** title", &ConvertOptions::default());
        assert!(rules.is_empty());
    }

    fn force_cloze() -> ConvertOptions {
        ConvertOptions {
            force_cloze: true,
            ..Default::default()
        }
    }

    #[test]
    fn force_cloze_takes_section_answers() {
        let content = "## Q\nA **stack** is LIFO.\n\n## Plain\nNo markup.";
        let (rules, skipped) = classify_rules(content, &force_cloze());
        assert_eq!(rules, vec![Rule::Cloze, Rule::Section]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn force_cloze_keeps_header_with_bullets_as_section() {
        let (rules, skipped) = classify_rules("## Q\n- **a**\n  - b", &force_cloze());
        assert_eq!(rules, vec![Rule::Section]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn force_cloze_keeps_nested_bullets_as_bullet() {
        let (rules, _) = classify_rules("- **top**\n  - child", &force_cloze());
        assert_eq!(rules, vec![Rule::Bullet]);
    }

    #[test]
    fn force_cloze_keeps_paragraph_before_code_as_code() {
        let blocks = segment("Does **Z**.\n```x\ny\n```");
        let classification = classify(&blocks, &force_cloze());
        assert_eq!(
            classification.spans,
            vec![Classified::Code {
                language: Some("x"),
                body: "y",
                context: CodeContext::Paragraph("Does **Z**."),
            }]
        );
    }

    #[test]
    fn mixed_document_keeps_source_order() {
        let content = "## Q\nA.\n\n- top\n  - child\n\nIntro.\n```sh\nls\n```\n\nUse `ls`.";
        let (rules, _) = classify_rules(content, &ConvertOptions::default());
        assert_eq!(rules, vec![Rule::Section, Rule::Bullet, Rule::Code, Rule::Cloze]);
    }
}
