//! Core types for the markdown-to-flashcard pipeline.

use serde::{Deserialize, Serialize};

/// A contiguous unit of source text produced by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header { level: u8, text: String },
    Paragraph(String),
    BulletList(Vec<BulletItem>),
    FencedCode { language: Option<String>, body: String },
}

/// One bullet with its nested sub-bullets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletItem {
    pub text: String,
    pub children: Vec<BulletItem>,
}

impl BulletItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Texts of every descendant, depth-first, in source order.
    pub fn descendant_texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child.text.as_str());
            out.extend(child.descendant_texts());
        }
        out
    }
}

/// Rule that produced a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Section,
    Bullet,
    Code,
    Cloze,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Bullet => "bullet",
            Self::Code => "code",
            Self::Cloze => "cloze",
        }
    }
}

/// A flashcard ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Basic {
        front: String,
        back: String,
        tags: Vec<String>,
    },
    Cloze {
        text: String,
        tags: Vec<String>,
    },
}

impl Card {
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Basic { tags, .. } | Self::Cloze { tags, .. } => tags,
        }
    }
}

/// Output format; selects the default field delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Csv,
    Tsv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Csv
    }
}

impl OutputFormat {
    pub fn default_delimiter(self) -> char {
        match self {
            Self::Csv => ',',
            Self::Tsv => '\t',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }
}

/// Options consumed by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    pub tags: Vec<String>,
    pub force_cloze: bool,
}

impl ConvertOptions {
    /// Set the tag list, normalised for the target application.
    ///
    /// Entries are trimmed, empty ones dropped, inner whitespace replaced by
    /// `_` and duplicates removed keeping the first occurrence.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag
                .as_ref()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("_");
            if !tag.is_empty() && !normalized.contains(&tag) {
                normalized.push(tag);
            }
        }
        self.tags = normalized;
        self
    }

    /// Explicit delimiter if given, otherwise the format's default.
    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or_else(|| self.format.default_delimiter())
    }
}

/// Per-rule card counts for one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub sections: usize,
    pub bullets: usize,
    pub code: usize,
    pub cloze: usize,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, rule: Rule) {
        match rule {
            Rule::Section => self.sections += 1,
            Rule::Bullet => self.bullets += 1,
            Rule::Code => self.code += 1,
            Rule::Cloze => self.cloze += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.sections + self.bullets + self.code + self.cloze
    }

    pub fn basic_count(&self) -> usize {
        self.sections + self.bullets + self.code
    }
}
