//! Word tokenization.
//!
//! Word characters are ASCII letters, digits, `_` and the apostrophe; every
//! other character separates words. Tokens are lowercased and lose any
//! leading or trailing apostrophes, so contractions such as "don't" stay a
//! single token while quoted words ("'cause", "dreamers'") are cleaned up.
//! Hyphens separate words: "well-known" yields "well" and "known".
//!
//! Typographic apostrophes (U+2018, U+2019) are treated as `'`.

/// Lazy iterator over the normalized tokens of a text.
///
/// Clone it before consuming to walk the same text again.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

/// Split `text` into normalized word tokens.
pub const fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Count the tokens in `text` without allocating them.
pub fn count_tokens(text: &str) -> usize {
    let mut rest = text;
    let mut count = 0;
    while let Some((raw, tail)) = next_raw(rest) {
        rest = tail;
        if !trim_apostrophes(raw).is_empty() {
            count += 1;
        }
    }
    count
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((raw, tail)) = next_raw(self.rest) {
            self.rest = tail;
            let trimmed = trim_apostrophes(raw);
            if !trimmed.is_empty() {
                return Some(normalize(trimmed));
            }
        }
        self.rest = "";
        None
    }
}

const fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}')
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || is_apostrophe(ch)
}

/// Find the next run of word characters, returning it and the remaining text.
fn next_raw(text: &str) -> Option<(&str, &str)> {
    let start = text.find(is_word_char)?;
    let tail = &text[start..];
    let end = tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());
    Some((&tail[..end], &tail[end..]))
}

fn trim_apostrophes(raw: &str) -> &str {
    raw.trim_matches(is_apostrophe)
}

fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| if is_apostrophe(c) { '\'' } else { c.to_ascii_lowercase() })
        .collect()
}
