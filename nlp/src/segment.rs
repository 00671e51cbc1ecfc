//! Sentence and word segmentation.
//!
//! Both follow UAX #29. Sentence splitting additionally re-joins segments
//! that were cut after a known abbreviation ("Mr. Smith"), which the plain
//! Unicode rules cannot tell apart from a sentence end.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that do not end a sentence, lowercase and without the
/// trailing period. Words that also end sentences as ordinary words ("no",
/// "co", month stems) are left out.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "inc", "ltd", "corp", "dept", "fig", "vol", "approx", "lt", "sgt", "capt", "gov",
];

/// The abbreviation list used by the sentence splitter.
#[derive(Debug, Clone)]
pub struct Abbreviations {
    words: HashSet<&'static str>,
}

impl Abbreviations {
    /// Build the bundled abbreviation list.
    pub fn load() -> Self {
        Self {
            words: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Does `segment` end with one of the abbreviations?
    pub fn ends_segment(&self, segment: &str) -> bool {
        let Some(stem) = segment.trim_end().strip_suffix('.') else {
            return false;
        };
        let last = stem
            .rsplit(|c: char| c.is_whitespace())
            .next()
            .unwrap_or(stem);
        self.words.contains(last.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split `text` into trimmed, non-empty sentences in reading order.
pub fn split_sentences(text: &str, abbreviations: &Abbreviations) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut pending = String::new();

    for segment in text.split_sentence_bounds() {
        pending.push_str(segment);
        if abbreviations.ends_segment(&pending) {
            continue;
        }
        push_trimmed(&mut sentences, &pending);
        pending.clear();
    }

    // Text that ended on an abbreviation
    push_trimmed(&mut sentences, &pending);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let sentence = segment.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

/// Split `text` into word and punctuation tokens, dropping whitespace.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|token| !token.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let sentences = split_sentences("Hello world. Goodbye now.", &Abbreviations::load());
        assert_eq!(sentences, vec!["Hello world.", "Goodbye now."]);
    }

    #[test]
    fn test_trailing_newline_is_trimmed() {
        let sentences = split_sentences("One. Two!\n", &Abbreviations::load());
        assert_eq!(sentences, vec!["One.", "Two!"]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let sentences = split_sentences(
            "Mr. Smith went to Washington. He stayed.",
            &Abbreviations::load(),
        );
        assert_eq!(
            sentences,
            vec!["Mr. Smith went to Washington.", "He stayed."]
        );
    }

    #[test]
    fn test_ordinary_words_end_sentences() {
        let abbreviations = Abbreviations::load();
        assert_eq!(
            split_sentences("He said no. She left.", &abbreviations),
            vec!["He said no.", "She left."]
        );
        assert_eq!(
            split_sentences("We met in Dec. It snowed.", &abbreviations),
            vec!["We met in Dec.", "It snowed."]
        );
    }

    #[test]
    fn test_blank_line_has_no_sentences() {
        assert!(split_sentences("   \n", &Abbreviations::load()).is_empty());
        assert!(split_sentences("", &Abbreviations::load()).is_empty());
    }

    #[test]
    fn test_words_keep_punctuation() {
        assert_eq!(
            split_words("Hello, world.\n"),
            vec!["Hello", ",", "world", "."]
        );
    }

    #[test]
    fn test_words_keep_numbers_whole() {
        assert_eq!(split_words("pi is 3.14"), vec!["pi", "is", "3.14"]);
    }

    #[test]
    fn test_abbreviation_lookup() {
        let abbreviations = Abbreviations::load();
        assert!(abbreviations.ends_segment("Ask Dr. "));
        assert!(abbreviations.ends_segment("e.g."));
        assert!(!abbreviations.ends_segment("The end. "));
        assert!(!abbreviations.ends_segment("No period"));
        assert!(!abbreviations.is_empty());
    }
}
