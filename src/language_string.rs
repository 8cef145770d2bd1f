use nutype::nutype;
use serde::{Deserialize, Serialize};

#[nutype(
    sanitize(trim, lowercase),
    validate(regex = "^[a-z]{2}[a-z0-9-]*$"),
    derive(Debug, Display, Clone, PartialEq)
)]
pub struct Language(String);

/// A text value in a specific language, as the action API serializes terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageString {
    language: String,
    value: String,
}

impl LanguageString {
    /// Constructs a new `LanguageString` object from a language code and a string.
    pub fn new<S1: Into<String>, S2: Into<String>>(language: S1, value: S2) -> LanguageString {
        LanguageString {
            language: language.into(),
            value: value.into(),
        }
    }

    /// Returns the language code of the language string.
    pub const fn language(&self) -> &String {
        &self.language
    }

    /// Returns the value (text) of the language string.
    pub const fn value(&self) -> &String {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_valid() {
        let language = Language::try_new("en").unwrap();
        assert_eq!(language.to_string(), "en");
    }

    #[test]
    fn test_language_sanitized() {
        let language = Language::try_new(" DE ").unwrap();
        assert_eq!(language.to_string(), "de");
    }

    #[test]
    fn test_language_invalid() {
        assert!(Language::try_new("").is_err());
        assert!(Language::try_new("x").is_err());
        assert!(Language::try_new("not a language").is_err());
    }

    #[test]
    fn test_language_string() {
        let s = LanguageString::new("en", "Hello");
        assert_eq!(s.language(), "en");
        assert_eq!(s.value(), "Hello");
    }

    #[test]
    fn test_language_string_deserialize() {
        let s: LanguageString =
            serde_json::from_str(r#"{"language":"en","value":"Hello"}"#).unwrap();
        assert_eq!(s, LanguageString::new("en", "Hello"));
    }

    #[test]
    fn test_language_string_serialize() {
        let s = LanguageString::new("en", "Hello");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"language":"en","value":"Hello"}"#);
    }
}
