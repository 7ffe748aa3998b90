//! Case-insensitive substring search across Markdown documents

use std::path::PathBuf;

use regex::{Regex, RegexBuilder};

use crate::inventory::Document;

/// Context lines shown on each side of a match when the caller has no opinion
pub const DEFAULT_CONTEXT: usize = 1;

/// A single search hit with its highlighted context snippet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMatch {
    /// Document the match was found in
    pub path: PathBuf,
    /// 1-based line number of the matching line
    pub line: usize,
    /// Context window around the match, original casing, query occurrences
    /// wrapped in brackets
    pub snippet: String,
}

/// Search all documents for a literal, case-insensitive substring.
///
/// Documents are visited in the given order, lines in document order. Each
/// match carries a snippet of `2 * context + 1` lines (clipped at document
/// boundaries) with every occurrence of the query bracket-highlighted in its
/// original casing. Documents that cannot be read are logged and skipped.
///
/// Results are not capped here; truncation policy belongs to the caller.
pub fn search_documents(docs: &[Document], query: &str, context: usize) -> Vec<SearchMatch> {
    let highlighter = build_highlighter(query);
    let mut matches = Vec::new();

    for doc in docs {
        let text = match doc.read_text() {
            Ok(text) => text,
            Err(err) => {
                log::warn!("skipping unreadable document: {err}");
                continue;
            }
        };
        search_text(&text, query, context, |line, window| {
            matches.push(SearchMatch {
                path: doc.path.clone(),
                line,
                snippet: wrap_occurrences(highlighter.as_ref(), window),
            });
        });
    }

    matches
}

/// Scan one document's text, invoking `on_match(line_number, window_text)`
/// for every matching line.
fn search_text(text: &str, query: &str, context: usize, mut on_match: impl FnMut(usize, &str)) {
    let query_lower = query.to_lowercase();
    let lines: Vec<&str> = text.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        if !line.to_lowercase().contains(&query_lower) {
            continue;
        }
        // 1-based window [line - context, line + context], clipped
        let number = idx + 1;
        let start = number.saturating_sub(context).max(1);
        let end = (number + context).min(lines.len());
        let window = lines[start - 1..end].join("\n");
        on_match(number, &window);
    }
}

/// Wrap every case-insensitive occurrence of `query` in `text` with
/// bracket markers, preserving the matched substring's original casing.
pub fn highlight(text: &str, query: &str) -> String {
    wrap_occurrences(build_highlighter(query).as_ref(), text)
}

/// Case-insensitive pattern for the escaped literal query.
///
/// `None` for an empty query, which matches everywhere and highlights
/// nothing.
fn build_highlighter(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

fn wrap_occurrences(pattern: Option<&Regex>, text: &str) -> String {
    match pattern {
        Some(re) => re.replace_all(text, "[${0}]").into_owned(),
        None => text.to_string(),
    }
}
