//! Context-free part-of-speech tagging with Penn Treebank tags.
//!
//! Each word is tagged on its own: closed-class words come from a lexicon,
//! everything else falls through to shape and suffix heuristics. Accuracy is
//! well below a trained model, and no sentence context is ever used.

use std::collections::HashMap;

use crate::error::NlpError;

/// A word together with its Penn Treebank tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: &'static str,
}

/// Closed-class entries: (tag, words).
const CLOSED_CLASSES: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
            "no", "all", "both", "either", "neither", "another",
        ],
    ),
    ("CC", &["and", "or", "but", "nor", "yet", "plus"]),
    (
        "IN",
        &[
            "of", "in", "for", "on", "with", "at", "from", "by", "about", "as", "into", "like",
            "through", "after", "over", "between", "against", "during", "without", "before",
            "under", "around", "among", "because", "while", "though", "although", "if", "unless",
            "until", "since", "than", "whether", "upon", "within", "across", "behind", "beyond",
        ],
    ),
    ("TO", &["to"]),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs"]),
    (
        "MD",
        &["can", "could", "will", "would", "shall", "should", "may", "might", "must"],
    ),
    ("VB", &["be"]),
    ("VBZ", &["is", "has", "does"]),
    ("VBP", &["am", "are", "have", "do"]),
    ("VBD", &["was", "were", "had", "did"]),
    ("VBN", &["been", "done", "gone"]),
    ("VBG", &["being", "having", "doing"]),
    (
        "RB",
        &[
            "not", "n't", "very", "also", "never", "always", "often", "too", "here", "now",
            "then", "again", "just", "still", "already", "soon", "so",
        ],
    ),
    ("WDT", &["which", "whatever"]),
    ("WP", &["who", "whom", "what", "whoever"]),
    ("WRB", &["when", "where", "why", "how"]),
    ("EX", &["there"]),
    ("UH", &["oh", "yes", "hello", "hi", "wow", "please"]),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ous", "ive", "able", "ible", "al", "ic"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ness", "ment", "ity", "ship", "er", "or"];

/// The tagger's word list.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Build the bundled closed-class lexicon.
    pub fn load() -> Self {
        let entries = CLOSED_CLASSES
            .iter()
            .flat_map(|(tag, words)| words.iter().map(move |word| (*word, *tag)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag a single token.
    pub fn tag(&self, word: &str) -> Result<TaggedWord, NlpError> {
        if word.is_empty() {
            return Err(NlpError::EmptyToken);
        }
        if word.chars().any(char::is_whitespace) {
            return Err(NlpError::NotAToken(word.to_string()));
        }
        Ok(TaggedWord {
            word: word.to_string(),
            tag: self.guess(word),
        })
    }

    fn guess(&self, word: &str) -> &'static str {
        if !word.chars().any(char::is_alphanumeric) {
            return punctuation_tag(word);
        }

        if word.chars().any(|c| c.is_ascii_digit())
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return "CD";
        }

        let lower = word.to_lowercase();
        if let Some(&tag) = self.entries.get(lower.as_str()) {
            return tag;
        }

        let mut chars = word.chars();
        if chars.next().is_some_and(char::is_uppercase) && chars.all(|c| !c.is_uppercase()) {
            return "NNP";
        }

        if lower.ends_with("ly") {
            return "RB";
        }
        if lower.ends_with("ing") {
            return "VBG";
        }
        if lower.ends_with("ed") {
            return "VBD";
        }
        if ADJECTIVE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            return "JJ";
        }
        if NOUN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix)) {
            return "NN";
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return "NNS";
        }

        "NN"
    }
}

fn punctuation_tag(token: &str) -> &'static str {
    match token {
        "." | "!" | "?" => ".",
        "," => ",",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "$" => "$",
        "#" => "#",
        "\"" | "'" | "''" => "''",
        "``" => "``",
        _ => ":",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(word: &str) -> &'static str {
        Lexicon::load().tag(word).unwrap().tag
    }

    #[test]
    fn test_closed_class_words() {
        assert_eq!(tag_of("The"), "DT");
        assert_eq!(tag_of("and"), "CC");
        assert_eq!(tag_of("of"), "IN");
        assert_eq!(tag_of("they"), "PRP");
        assert_eq!(tag_of("would"), "MD");
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag_of("beautiful"), "JJ");
        assert_eq!(tag_of("running"), "VBG");
        assert_eq!(tag_of("jumped"), "VBD");
        assert_eq!(tag_of("quickly"), "RB");
        assert_eq!(tag_of("information"), "NN");
        assert_eq!(tag_of("cats"), "NNS");
        assert_eq!(tag_of("fox"), "NN");
    }

    #[test]
    fn test_shapes() {
        assert_eq!(tag_of("London"), "NNP");
        assert_eq!(tag_of("42"), "CD");
        assert_eq!(tag_of("3.14"), "CD");
        assert_eq!(tag_of("."), ".");
        assert_eq!(tag_of(","), ",");
        assert_eq!(tag_of(";"), ":");
    }

    #[test]
    fn test_rejects_non_tokens() {
        let lexicon = Lexicon::load();
        assert_eq!(lexicon.tag(""), Err(NlpError::EmptyToken));
        assert_eq!(
            lexicon.tag("two words"),
            Err(NlpError::NotAToken("two words".to_string()))
        );
    }

    #[test]
    fn test_tagged_word_keeps_original_spelling() {
        let tagged = Lexicon::load().tag("The").unwrap();
        assert_eq!(tagged.word, "The");
    }
}
