use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use super::FRONT_MATTER_MIN_CHARS;
use super::coverage::{TitleCoverage, title_coverage};
use super::format::ParagraphFormatter;
use super::render::render_module;
use super::segment::{canon_lines, split_segments};
use crate::cli::BuildArgs;
use crate::model::{BookContent, BuildManifest, Chapter, ChapterSummary};
use crate::titles::{BOOK_AUTHOR, BOOK_TITLE, TitleMap};
use crate::util::{now_utc_string, sha256_bytes, write_json_pretty, write_text_file};

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, Default)]
pub(super) struct AssembledChapters {
    pub chapters: Vec<Chapter>,
    pub summaries: Vec<ChapterSummary>,
    pub front_matter_dropped: bool,
    pub coverage: TitleCoverage,
}

pub fn run(args: BuildArgs) -> Result<()> {
    info!(path = %args.input.display(), "reading canon");

    let Some(raw) = read_input(&args.input)? else {
        error!(path = %args.input.display(), "input file not found");
        return Ok(());
    };
    let source = decode_canon(&raw, &args.input)?;

    let titles = TitleMap::canon();
    let formatter = ParagraphFormatter::new()?;
    let assembled = assemble_chapters(&source, &titles, &formatter);

    info!(
        known_titles = titles.len(),
        missing = assembled.coverage.missing.len(),
        "title table checked"
    );
    for title in &assembled.coverage.missing {
        warn!(title = %title, "title never matched a line in the canon");
    }
    for title in &assembled.coverage.duplicated {
        warn!(title = %title, "title matched more than once");
    }

    let book = BookContent {
        title: BOOK_TITLE,
        author: BOOK_AUTHOR,
        chapters: assembled.chapters,
    };

    if args.dry_run {
        info!(chapters = book.chapters.len(), "dry-run complete, nothing written");
        return Ok(());
    }

    let module = render_module(&book)?;

    info!(
        chapters = book.chapters.len(),
        path = %args.output.display(),
        "writing chapters"
    );
    write_text_file(&args.output, &module)?;

    if let Some(manifest_path) = &args.manifest_path {
        let manifest = BuildManifest {
            manifest_version: 1,
            generated_at: now_utc_string(),
            input_path: args.input.display().to_string(),
            input_sha256: sha256_bytes(&raw),
            output_path: args.output.display().to_string(),
            output_sha256: sha256_bytes(module.as_bytes()),
            chapter_count: book.chapters.len(),
            front_matter_dropped: assembled.front_matter_dropped,
            chapters: assembled.summaries,
            missing_titles: assembled.coverage.missing,
            duplicate_titles: assembled.coverage.duplicated,
        };
        write_json_pretty(manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote build manifest");
    }

    info!("done");
    Ok(())
}

fn read_input(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
    }
}

pub(super) fn decode_canon(raw: &[u8], path: &Path) -> Result<String> {
    let text = std::str::from_utf8(raw)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

pub(super) fn assemble_chapters(
    source: &str,
    titles: &TitleMap,
    formatter: &ParagraphFormatter,
) -> AssembledChapters {
    let segments = split_segments(canon_lines(source), titles);
    let coverage = title_coverage(&segments, titles);

    let mut assembled = AssembledChapters {
        coverage,
        ..AssembledChapters::default()
    };

    for segment in &segments {
        let formatted = formatter.format(&segment.lines);
        assembled.summaries.push(ChapterSummary {
            title: segment.title.clone(),
            content_chars: formatted.content.chars().count(),
            paragraph_count: formatted.paragraph_count,
            subheading_count: formatted.subheading_count,
        });
        assembled.chapters.push(Chapter {
            title: segment.title.clone(),
            content: formatted.content,
        });
    }

    let leading_is_short = assembled
        .summaries
        .first()
        .map(|summary| summary.content_chars < FRONT_MATTER_MIN_CHARS)
        .unwrap_or(false);
    if leading_is_short {
        info!(
            title = %assembled.chapters[0].title,
            "skipping short front matter section"
        );
        assembled.chapters.remove(0);
        assembled.summaries.remove(0);
        assembled.front_matter_dropped = true;
    }

    assembled
}
