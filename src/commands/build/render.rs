use anyhow::{Context, Result};

use crate::model::BookContent;

pub(super) fn render_module(book: &BookContent) -> Result<String> {
    let title = serde_json::to_string(book.title).context("failed to serialize book title")?;
    let author = serde_json::to_string(book.author).context("failed to serialize book author")?;
    let chapters =
        serde_json::to_string_pretty(&book.chapters).context("failed to serialize chapters")?;

    let module = format!(
        "export const bookTitle = {title};\nexport const bookAuthor = {author};\n\nexport const chapters = {chapters};\n"
    );

    Ok(escape_non_ascii(&module))
}

// Only valid where non-ASCII chars and DEL can appear solely inside string literals.
pub(super) fn escape_non_ascii(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut units = [0_u16; 2];

    for ch in text.chars() {
        if ch.is_ascii() && ch != '\u{7f}' {
            escaped.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units).iter() {
            escaped.push_str(&format!("\\u{unit:04x}"));
        }
    }

    escaped
}
