//! Table of Contents extraction from Markdown

/// A header in a Markdown document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Header level, 1 through 6
    pub level: u8,
    /// Header text with surrounding whitespace removed
    pub title: String,
    /// 1-based line number in the source document
    pub line: usize,
}

/// Extract the header outline of a Markdown document.
///
/// Headers appear in document order. Level sequence is preserved as written;
/// a level-3 header directly after a level-1 header is not normalized. A
/// document with no headers yields an empty list.
pub fn extract_toc(text: &str) -> Vec<HeaderEntry> {
    let mut toc = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some((level, title)) = parse_atx_header(raw.trim()) {
            toc.push(HeaderEntry {
                level,
                title: title.to_string(),
                line: idx + 1,
            });
        }
    }
    toc
}

/// Parse an ATX header (returns level and title if valid, None otherwise)
fn parse_atx_header(line: &str) -> Option<(u8, &str)> {
    let hash_count = line.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // The hash run must be followed by whitespace and a non-empty title, so
    // a bare "###" or a "#tag" is not a header.
    let rest = &line[hash_count..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    Some((hash_count as u8, title))
}
