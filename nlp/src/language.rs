//! Languages with a sentence segmentation model.

use crate::error::NlpError;

/// Language names accepted by the segmentation calls.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "czech",
    "danish",
    "dutch",
    "english",
    "estonian",
    "finnish",
    "french",
    "german",
    "greek",
    "italian",
    "norwegian",
    "polish",
    "portuguese",
    "russian",
    "slovene",
    "spanish",
    "swedish",
    "turkish",
];

/// Check that `language` names a supported model (case-insensitive).
pub fn check_language(language: &str) -> Result<(), NlpError> {
    if SUPPORTED_LANGUAGES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(language))
    {
        Ok(())
    } else {
        Err(NlpError::UnsupportedLanguage(language.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_accepted() {
        assert!(check_language("english").is_ok());
        assert!(check_language("German").is_ok());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = check_language("klingon").unwrap_err();
        assert_eq!(err, NlpError::UnsupportedLanguage("klingon".to_string()));
        assert_eq!(err.to_string(), "unsupported language \"klingon\"");
    }
}
