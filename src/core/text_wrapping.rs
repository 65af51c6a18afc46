//! Word wrapping for message bubbles.
//!
//! Bubbles are laid out before rendering so the message list knows exactly
//! how many rows each message takes; ratatui's own `Wrap` does not expose
//! that. Widths are measured in terminal cells, so wide characters count
//! double.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration for text wrapping behavior
#[derive(Debug, Clone, Copy)]
pub struct WrapConfig {
    /// Maximum width for text lines, in cells
    pub width: usize,
}

impl WrapConfig {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }
}

pub struct TextWrapper;

impl TextWrapper {
    /// Wrap text at word boundaries. Words longer than the width are split.
    /// Explicit newlines start a new line. Runs of whitespace at a wrap point
    /// are dropped; elsewhere they are kept.
    pub fn wrap_lines(text: &str, config: &WrapConfig) -> Vec<String> {
        let mut out = Vec::new();
        for paragraph in text.split('\n') {
            wrap_paragraph(paragraph, config.width, &mut out);
        }
        out
    }

    pub fn count_wrapped_lines(text: &str, config: &WrapConfig) -> usize {
        Self::wrap_lines(text, config).len()
    }

    /// Widest line after wrapping.
    pub fn max_line_width(lines: &[String]) -> usize {
        lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0)
    }
}

fn wrap_paragraph(paragraph: &str, width: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0usize;
    let mut pending_space = String::new();
    let mut pending_space_width = 0usize;

    for token in tokenize(paragraph) {
        match token {
            Token::Space(space) => {
                pending_space.push_str(space);
                pending_space_width += UnicodeWidthStr::width(space);
            }
            Token::Word(word) => {
                let word_width = UnicodeWidthStr::width(word);
                let fits = line_width + pending_space_width + word_width <= width;

                if fits {
                    line.push_str(&pending_space);
                    line.push_str(word);
                    line_width += pending_space_width + word_width;
                } else if word_width <= width {
                    if !line.is_empty() {
                        out.push(std::mem::take(&mut line));
                    }
                    line.push_str(word);
                    line_width = word_width;
                } else {
                    // Break the long word across as many lines as needed.
                    if line_width + pending_space_width < width && !line.is_empty() {
                        line.push_str(&pending_space);
                        line_width += pending_space_width;
                    } else if !line.is_empty() {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    for ch in word.chars() {
                        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                        if line_width + ch_width > width && !line.is_empty() {
                            out.push(std::mem::take(&mut line));
                            line_width = 0;
                        }
                        line.push(ch);
                        line_width += ch_width;
                    }
                }
                pending_space.clear();
                pending_space_width = 0;
            }
        }
    }

    if line.is_empty() && !pending_space.is_empty() && pending_space_width <= width {
        line = pending_space;
    }
    out.push(line);
}

enum Token<'a> {
    Word(&'a str),
    Space(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match in_space {
            Some(current) if current != is_space => {
                tokens.push(make_token(&text[start..idx], current));
                start = idx;
                in_space = Some(is_space);
            }
            None => in_space = Some(is_space),
            _ => {}
        }
    }

    if let Some(current) = in_space {
        tokens.push(make_token(&text[start..], current));
    }
    tokens
}

fn make_token(slice: &str, is_space: bool) -> Token<'_> {
    if is_space {
        Token::Space(slice)
    } else {
        Token::Word(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, width: usize) -> Vec<String> {
        TextWrapper::wrap_lines(text, &WrapConfig::new(width))
    }

    #[test]
    fn test_basic_wrapping() {
        assert_eq!(
            wrap("How are you doing today?", 10),
            ["How are", "you doing", "today?"]
        );
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hi", 20), ["hi"]);
        assert_eq!(TextWrapper::count_wrapped_lines("hi", &WrapConfig::new(20)), 1);
    }

    #[test]
    fn test_preserve_multiple_spaces() {
        assert_eq!(wrap("a   b", 20), ["a   b"]);
    }

    #[test]
    fn test_long_word_breaking() {
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ok abcdefgh", 4), ["ok a", "bcde", "fgh"]);
    }

    #[test]
    fn test_wrap_with_double_width_characters() {
        let lines = wrap("日本語のテキスト", 6);
        assert_eq!(lines, ["日本語", "のテキ", "スト"]);
        assert_eq!(TextWrapper::max_line_width(&lines), 6);
    }

    #[test]
    fn newlines_start_new_lines() {
        assert_eq!(wrap("one\n\ntwo", 10), ["one", "", "two"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), [""]);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap("ab", 0), ["a", "b"]);
    }
}
