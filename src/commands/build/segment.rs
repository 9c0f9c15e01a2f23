use tracing::info;

use super::PLACEHOLDER_TITLE;
use crate::titles::TitleMap;

// Headings are only created by the splitter, never parsed out of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SegmentLine {
    Heading(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Segment {
    pub title: String,
    pub lines: Vec<SegmentLine>,
}

// `\n`, `\r\n` and a lone `\r` all end a line.
pub(super) fn canon_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}

pub(super) fn split_segments<'a, I>(lines: I, titles: &TitleMap) -> Vec<Segment>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segments = Vec::<Segment>::new();
    let mut current_title = PLACEHOLDER_TITLE.to_string();
    let mut buffer = Vec::<SegmentLine>::new();

    for line in lines {
        let Some(found) = titles.display_title(line.trim()) else {
            buffer.push(SegmentLine::Text(line.to_string()));
            continue;
        };

        info!(title = %found, "found title");

        if !buffer.is_empty() {
            segments.push(Segment {
                title: current_title,
                lines: std::mem::take(&mut buffer),
            });
        }

        current_title = found.to_string();
        buffer.push(SegmentLine::Heading(current_title.clone()));
    }

    if !buffer.is_empty() {
        segments.push(Segment {
            title: current_title,
            lines: buffer,
        });
    }

    segments
}
