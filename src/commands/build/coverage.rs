use std::collections::HashMap;

use super::segment::{Segment, SegmentLine};
use crate::titles::TitleMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct TitleCoverage {
    pub missing: Vec<String>,
    pub duplicated: Vec<String>,
}

pub(super) fn title_coverage(segments: &[Segment], titles: &TitleMap) -> TitleCoverage {
    let mut seen = HashMap::<&str, usize>::new();
    for segment in segments {
        if let Some(SegmentLine::Heading(title)) = segment.lines.first() {
            *seen.entry(title.as_str()).or_default() += 1;
        }
    }

    let mut coverage = TitleCoverage::default();
    for display in titles.display_titles() {
        match seen.get(display).copied().unwrap_or(0) {
            0 => coverage.missing.push(display.to_string()),
            1 => {}
            _ => coverage.duplicated.push(display.to_string()),
        }
    }

    coverage
}
