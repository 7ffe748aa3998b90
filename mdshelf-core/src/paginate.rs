//! Viewport-aware text pagination

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows reserved for title and footer chrome drawn by the shell
pub const CHROME_ROWS: u16 = 3;

/// The page body never shrinks below this many rows
pub const MIN_BODY_ROWS: usize = 10;

/// Terminal dimensions used for wrapping and page sizing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Default for Viewport {
    /// Fallback size when the real terminal size is unavailable
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 30,
        }
    }
}

impl Viewport {
    /// Usable body height: total rows minus chrome, floored at `MIN_BODY_ROWS`
    pub fn body_rows(&self) -> usize {
        MIN_BODY_ROWS.max((self.rows as usize).saturating_sub(CHROME_ROWS as usize))
    }
}

/// One screenful of wrapped lines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Total number of pages in the sequence
    pub total: usize,
    pub lines: Vec<String>,
}

/// Finite forward-only sequence of pages.
///
/// Pages are yielded one at a time; there is no backward navigation and no
/// mid-read resize. Restarting means calling [`paginate`] again, which is
/// cheap since everything derives from the source text.
pub struct Pages {
    title: Option<String>,
    lines: Vec<String>,
    body_rows: usize,
    cursor: usize,
    number: usize,
}

impl Pages {
    /// Title to draw in the page chrome, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Total number of pages this sequence will yield
    pub fn total(&self) -> usize {
        self.lines.len().div_ceil(self.body_rows)
    }
}

impl Iterator for Pages {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        if self.cursor >= self.lines.len() {
            return None;
        }
        let end = (self.cursor + self.body_rows).min(self.lines.len());
        let lines = self.lines[self.cursor..end].to_vec();
        self.cursor = end;
        self.number += 1;
        Some(Page {
            number: self.number,
            total: self.total(),
            lines,
        })
    }
}

/// Reflow `text` to the viewport and slice it into pages.
///
/// Each source line is word-wrapped independently to the viewport width; an
/// empty source line still yields exactly one empty output line. Wrapped
/// lines keep their original order and are cut into consecutive chunks of
/// [`Viewport::body_rows`] lines, the last chunk possibly shorter.
pub fn paginate(text: &str, title: Option<&str>, viewport: Viewport) -> Pages {
    let width = (viewport.columns as usize).max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        lines.extend(wrap_line(raw, width));
    }

    Pages {
        title: title.map(str::to_string),
        lines,
        body_rows: viewport.body_rows(),
        cursor: 0,
        number: 0,
    }
}

/// Word-wrap a single line to `width` display columns.
///
/// Words are measured in display columns, not bytes. A word wider than the
/// whole line is hard-split at column boundaries. A line with no words yields
/// one empty string, never zero lines.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        for piece in split_wide_word(word, width) {
            let piece_width = piece.width();
            let needed = if current.is_empty() {
                piece_width
            } else {
                current_width + 1 + piece_width
            };
            if !current.is_empty() && needed > width {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

/// Split a word that exceeds the line width into width-sized pieces
fn split_wide_word(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(columns: u16, rows: u16) -> Viewport {
        Viewport { columns, rows }
    }

    #[test]
    fn test_wrap_empty_line_yields_one_line() {
        assert_eq!(wrap_line("", 20), vec![String::new()]);
        assert_eq!(wrap_line("   ", 20), vec![String::new()]);
    }

    #[test]
    fn test_wrap_short_line_unchanged() {
        assert_eq!(wrap_line("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        assert_eq!(
            wrap_line("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        assert_eq!(wrap_line("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap_line("ab cd", 5), vec!["ab cd"]);
        assert_eq!(wrap_line("ab cde", 5), vec!["ab", "cde"]);
    }

    #[test]
    fn test_body_rows_floor() {
        assert_eq!(viewport(80, 30).body_rows(), 27);
        assert_eq!(viewport(80, 5).body_rows(), MIN_BODY_ROWS);
        assert_eq!(viewport(80, 0).body_rows(), MIN_BODY_ROWS);
    }

    #[test]
    fn test_default_viewport() {
        let vp = Viewport::default();
        assert_eq!(vp.columns, 100);
        assert_eq!(vp.rows, 30);
    }

    #[test]
    fn test_paginate_chunks_and_numbers() {
        // 25 short lines, body of 10 rows -> pages of 10, 10, 5
        let text = (0..25).map(|i| format!("line {i}\n")).collect::<String>();
        let pages: Vec<_> = paginate(&text, None, viewport(80, 13)).collect();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].lines.len(), 10);
        assert_eq!(pages[1].lines.len(), 10);
        assert_eq!(pages[2].lines.len(), 5);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[2].number, 3);
        assert!(pages.iter().all(|p| p.total == 3));
    }

    #[test]
    fn test_paginate_preserves_content_and_order() {
        let text = "alpha beta gamma delta\n\nshort\nanother fairly long line here\n";
        let vp = viewport(12, 20);
        let pages: Vec<_> = paginate(text, None, vp).collect();

        let mut rejoined = Vec::new();
        for page in &pages {
            rejoined.extend(page.lines.iter().cloned());
        }

        let mut expected = Vec::new();
        for line in text.lines() {
            expected.extend(wrap_line(line, 12));
        }
        assert_eq!(rejoined, expected);

        // The blank source line survives as exactly one blank output line
        assert_eq!(rejoined.iter().filter(|l| l.is_empty()).count(), 1);
    }

    #[test]
    fn test_paginate_empty_text_has_no_pages() {
        let mut pages = paginate("", None, viewport(80, 30));
        assert_eq!(pages.total(), 0);
        assert!(pages.next().is_none());
    }

    #[test]
    fn test_paginate_carries_title() {
        let pages = paginate("body\n", Some("README.md"), viewport(80, 30));
        assert_eq!(pages.title(), Some("README.md"));
    }

    #[test]
    fn test_pages_exhaust_once() {
        let text = "one\ntwo\nthree\n";
        let mut pages = paginate(text, None, viewport(80, 30));
        assert!(pages.next().is_some());
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());
    }
}
