//! Splits markdown into top-level blocks.
//!
//! # Recognised blocks
//! ````markdown
//! ## Level-2 header
//! A paragraph runs until a blank line
//! or the start of another block.
//!
//! - Bullet
//!   - Nested bullet
//!
//! ```rust
//! fenced code
//! ```
//! ````
//!
//! Headers of any other level are ordinary paragraph text. Segmenting never
//! fails: anything unrecognised ends up in a paragraph.

use crate::types::{Block, BulletItem};

const TAB_WIDTH: usize = 4;

/// Segment markdown content into blocks in source order.
pub fn segment(content: &str) -> Vec<Block> {
    let mut segmenter = Segmenter::new();
    for line in content.lines() {
        segmenter.process_line(line);
    }
    segmenter.finalize()
}

struct OpenFence<'a> {
    language: Option<String>,
    lines: Vec<&'a str>,
}

struct Segmenter<'a> {
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    bullets: Vec<(usize, String)>,
    fence: Option<OpenFence<'a>>,
}

impl<'a> Segmenter<'a> {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            paragraph: Vec::new(),
            bullets: Vec::new(),
            fence: None,
        }
    }

    fn process_line(&mut self, line: &'a str) {
        if let Some(fence) = self.fence.as_mut() {
            if is_closing_fence(line) {
                self.close_fence();
            } else {
                fence.lines.push(line);
            }
            return;
        }

        match Self::parse_line(line) {
            LineType::Blank => self.flush(),
            LineType::Header(text) => {
                self.flush();
                self.blocks.push(Block::Header {
                    level: 2,
                    text: text.to_string(),
                });
            }
            LineType::Fence(language) => {
                self.flush();
                self.fence = Some(OpenFence {
                    language: language.map(str::to_string),
                    lines: Vec::new(),
                });
            }
            LineType::Bullet { indent, text } => {
                self.flush_paragraph();
                self.bullets.push((indent, text.to_string()));
            }
            LineType::Text(text) => {
                self.flush_bullets();
                self.paragraph.push(text);
            }
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            LineType::Blank
        } else if let Some(rest) = line.strip_prefix("## ") {
            LineType::Header(rest.trim())
        } else if trimmed.starts_with("```") {
            let language = trimmed.trim_start_matches('`').trim();
            LineType::Fence((!language.is_empty()).then_some(language))
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            LineType::Bullet {
                indent: indent_width(line),
                text: rest.trim(),
            }
        } else {
            LineType::Text(line)
        }
    }

    fn close_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            self.blocks.push(Block::FencedCode {
                language: fence.language,
                body: fence.lines.join("\n"),
            });
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_bullets();
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let text = self
            .paragraph
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        self.paragraph.clear();
        self.blocks.push(Block::Paragraph(text.trim().to_string()));
    }

    fn flush_bullets(&mut self) {
        if self.bullets.is_empty() {
            return;
        }

        let flat = std::mem::take(&mut self.bullets);
        let mut pos = 0;
        let items = nest(&flat, &mut pos, None);
        self.blocks.push(Block::BulletList(items));
    }

    fn finalize(mut self) -> Vec<Block> {
        // An unterminated fence runs to the end of the document.
        self.close_fence();
        self.flush();
        self.blocks
    }
}

/// Build the bullet tree from `(indent, text)` pairs.
///
/// An item nests under the closest preceding item with a smaller indent; an
/// item shallower than everything open becomes top-level.
fn nest(flat: &[(usize, String)], pos: &mut usize, parent: Option<usize>) -> Vec<BulletItem> {
    let mut items = Vec::new();

    while let Some((indent, text)) = flat.get(*pos) {
        if parent.is_some_and(|p| *indent <= p) {
            break;
        }
        *pos += 1;
        let children = nest(flat, pos, Some(*indent));
        items.push(BulletItem {
            text: text.clone(),
            children,
        });
    }

    items
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

fn is_closing_fence(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '`')
}

enum LineType<'a> {
    Blank,
    Header(&'a str),
    Fence(Option<&'a str>),
    Bullet { indent: usize, text: &'a str },
    Text(&'a str),
}
