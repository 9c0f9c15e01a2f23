use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct BookContent {
    pub title: &'static str,
    pub author: &'static str,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub title: String,
    pub content_chars: usize,
    pub paragraph_count: usize,
    pub subheading_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub input_path: String,
    pub input_sha256: String,
    pub output_path: String,
    pub output_sha256: String,
    pub chapter_count: usize,
    pub front_matter_dropped: bool,
    pub chapters: Vec<ChapterSummary>,
    pub missing_titles: Vec<String>,
    pub duplicate_titles: Vec<String>,
}
