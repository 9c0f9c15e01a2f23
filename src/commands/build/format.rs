use anyhow::{Context, Result};
use regex::Regex;

use super::SUBHEADING_MAX_CHARS;
use super::segment::SegmentLine;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Heading(String),
    Paragraph(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FormattedSegment {
    pub content: String,
    pub paragraph_count: usize,
    pub subheading_count: usize,
}

pub(super) struct ParagraphFormatter {
    subheading: Regex,
}

impl ParagraphFormatter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            subheading: Regex::new(r"(?i)^(?:CHAPTER [IVXLC]+|PART [IVXLC]+|[IVXLC]+\.?)$")
                .context("failed to compile subheading regex")?,
        })
    }

    pub fn format(&self, lines: &[SegmentLine]) -> FormattedSegment {
        let mut formatted = FormattedSegment::default();
        let mut units = Vec::<String>::new();

        for block in collect_blocks(lines) {
            match block {
                Block::Heading(title) => {
                    units.push(format!("<h2>{}</h2>", escape_html(&title)));
                }
                Block::Paragraph(text) => {
                    let safe = escape_html(&text);
                    if self.is_subheading(&safe) {
                        formatted.subheading_count += 1;
                        units.push(format!("<h3>{safe}</h3>"));
                    } else {
                        formatted.paragraph_count += 1;
                        units.push(format!("<p>{safe}</p>"));
                    }
                }
            }
        }

        formatted.content = units.join("\n");
        formatted
    }

    fn is_subheading(&self, text: &str) -> bool {
        self.subheading.is_match(text) && text.chars().count() < SUBHEADING_MAX_CHARS
    }
}

fn collect_blocks(lines: &[SegmentLine]) -> Vec<Block> {
    let mut blocks = Vec::<Block>::new();
    let mut current = Vec::<&str>::new();

    for line in lines {
        match line {
            SegmentLine::Heading(title) => {
                flush_paragraph(&mut current, &mut blocks);
                blocks.push(Block::Heading(title.clone()));
            }
            SegmentLine::Text(raw) => {
                let stripped = raw.trim();
                if stripped.is_empty() {
                    flush_paragraph(&mut current, &mut blocks);
                } else {
                    current.push(stripped);
                }
            }
        }
    }

    flush_paragraph(&mut current, &mut blocks);
    blocks
}

fn flush_paragraph(current: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !current.is_empty() {
        blocks.push(Block::Paragraph(current.join(" ")));
        current.clear();
    }
}

// `&` goes first so the entities produced for `<` and `>` survive intact.
pub(super) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
