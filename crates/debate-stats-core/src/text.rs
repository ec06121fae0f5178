//! Sentence splitting.
//!
//! Sentence counts feed the readability formulas, so the splitter tries not
//! to break on periods that do not end a sentence: abbreviations ("Sen."),
//! dotted initials ("J.D."), decimals ("3.5"), and ellipses. A lone capital
//! before a period ("Plan B.") ends the sentence like any other word.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::is_abbreviation;
use crate::tokenize::count_tokens;

/// Regex for dotted initials (J.D, U.S.A).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{Lu}\.)+\p{Lu}$").expect("valid regex"));

/// Split text into sentences.
///
/// Returns trimmed slices of `text`. Any fragment holding at least one word
/// is a sentence, so an unpunctuated "OK" counts as one. Closing quotes and brackets directly
/// after the terminator stay with the sentence they close.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (_, ch) = chars[i];
        if is_sentence_terminator(ch) && is_sentence_boundary(&chars, i) {
            let mut j = i + 1;
            while j < chars.len() && is_closing(chars[j].1) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
            i = j;
            continue;
        }
        i += 1;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

/// Count sentences in text.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let sentence = fragment.trim();
    if count_tokens(sentence) > 0 {
        sentences.push(sentence);
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

fn is_sentence_boundary(chars: &[(usize, char)], pos: usize) -> bool {
    let ch = chars[pos].1;

    // Only the last terminator of a run ("?!", "...") can end a sentence.
    if chars
        .get(pos + 1)
        .is_some_and(|&(_, next)| is_sentence_terminator(next))
    {
        return false;
    }

    if ch == '.' {
        // Ellipsis
        if pos > 0 && chars[pos - 1].1 == '.' {
            return false;
        }

        // Inside a token: decimals (3.5) and dotted runs (J.D., U.S.)
        if chars
            .get(pos + 1)
            .is_some_and(|&(_, next)| next.is_alphanumeric())
        {
            return false;
        }

        let word = word_before(chars, pos);
        if is_abbreviation(&word) || is_initial(&word) {
            return false;
        }
    }

    // Lowercase continuation means the terminator was not a boundary.
    !next_significant_char(chars, pos).is_some_and(char::is_lowercase)
}

/// The first character after `pos` that is not whitespace or a closing mark.
fn next_significant_char(chars: &[(usize, char)], pos: usize) -> Option<char> {
    chars[pos + 1..]
        .iter()
        .map(|&(_, c)| c)
        .find(|&c| !c.is_whitespace() && !is_closing(c))
}

/// The run of alphanumerics and periods directly before `pos`.
fn word_before(chars: &[(usize, char)], pos: usize) -> String {
    let mut word: Vec<char> = chars[..pos]
        .iter()
        .rev()
        .map(|&(_, c)| c)
        .take_while(|&c| c.is_alphanumeric() || c == '.')
        .collect();
    word.reverse();
    word.into_iter().collect::<String>().trim_matches('.').to_string()
}

fn is_initial(word: &str) -> bool {
    INITIALS_PATTERN.is_match(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("I think the economy is strong. The economy is growing.");
        assert_eq!(
            sentences,
            vec!["I think the economy is strong.", "The economy is growing."]
        );
    }

    #[test]
    fn abbreviations_not_split() {
        let sentences = split_sentences("Sen. Vance said that. Dr. Smith agreed.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("Sen. Vance"));
    }

    #[test]
    fn initials_not_split() {
        let sentences = split_sentences("J.D. Vance is here. The U.S. Senate voted.");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn pronoun_i_still_ends_sentence() {
        assert_eq!(count_sentences("Neither did I. We moved on."), 2);
    }

    #[test]
    fn single_capital_ends_sentence() {
        assert_eq!(count_sentences("We need a Plan B. Jobs matter."), 2);
        assert_eq!(count_sentences("I got an A. Then I left."), 2);
    }

    #[test]
    fn decimal_numbers_not_split() {
        let sentences = split_sentences("The rate is 3.5 percent. That's high.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.5"));
    }

    #[test]
    fn question_and_exclamation() {
        assert_eq!(
            count_sentences("Are you serious? I can't believe it! This is amazing."),
            3
        );
    }

    #[test]
    fn terminator_runs_and_ellipsis() {
        assert_eq!(count_sentences("Really?! Yes."), 2);
        assert_eq!(count_sentences("Well... I think so."), 1);
    }

    #[test]
    fn lowercase_continuation() {
        assert_eq!(count_sentences("He said no. and then left."), 1);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        let sentences = split_sentences("She said \"Stop.\" Then she left.");
        assert_eq!(sentences, vec!["She said \"Stop.\"", "Then she left."]);
    }

    #[test]
    fn missing_final_terminator() {
        assert_eq!(count_sentences("First one. And a trailing thought"), 2);
    }

    #[test]
    fn empty_and_wordless_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences("?!").is_empty());
    }

    #[test]
    fn short_interjections_are_sentences() {
        assert_eq!(split_sentences("OK"), vec!["OK"]);
        assert_eq!(count_sentences("No."), 1);
        assert_eq!(count_sentences("No. Yes. OK"), 3);
    }
}
