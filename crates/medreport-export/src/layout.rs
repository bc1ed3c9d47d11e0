//! Fixed-width page layout.
//!
//! Report text is sanitized to the Latin-1 repertoire that built-in document
//! fonts can render, word-wrapped to a maximum line width, and split into
//! pages of a fixed number of lines. Paragraph breaks survive as blank
//! lines.

/// Line width and page height for exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub line_width: usize,
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self { line_width: 90, lines_per_page: 48 }
    }
}

/// One page of laid-out lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<String>,
}

impl PageLayout {
    pub fn new(line_width: usize, lines_per_page: usize) -> Self {
        Self {
            line_width: line_width.max(1),
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Sanitize, wrap, and paginate `text`. Always returns at least one page.
    pub fn layout(&self, text: &str) -> Vec<Page> {
        let clean = sanitize(text);
        let mut lines = Vec::new();
        for source_line in clean.split('\n') {
            if source_line.trim().is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(wrap_text(source_line, self.line_width));
            }
        }
        paginate(lines, self.lines_per_page)
    }
}

/// Make `text` safe for a Latin-1 page.
///
/// Typographic quotes, dashes, and ellipses become ASCII; tabs become a
/// space; other control characters are dropped; anything else outside
/// Latin-1 becomes `?`. Newlines are kept.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\r' => {}
            '\t' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Words longer than a whole line are split across lines. Returns a single
/// empty line for blank input.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that cannot fit on any line.
        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split `lines` into numbered pages of at most `lines_per_page` lines.
pub fn paginate(lines: Vec<String>, lines_per_page: usize) -> Vec<Page> {
    let lines_per_page = lines_per_page.max(1);
    let mut pages: Vec<Page> = lines
        .chunks(lines_per_page)
        .enumerate()
        .map(|(idx, chunk)| Page { number: idx + 1, lines: chunk.to_vec() })
        .collect();

    if pages.is_empty() {
        pages.push(Page { number: 1, lines: Vec::new() });
    }
    pages
}
