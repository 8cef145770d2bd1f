use crate::{ApiError, LanguageString};
use serde_json::Value;
use std::collections::HashMap;

/// A language => text map, used for entity labels and descriptions.
///
/// Parses the action API term map shape `{"en": {"language": "en", "value": "…"}}`.
/// With formatversion=1 the API serializes an empty map as `[]`, so an empty
/// array (or an absent member) is accepted as an empty collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageStrings {
    ls: HashMap<String, String>,
}

impl LanguageStrings {
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let map = match j {
            Value::Null => return Ok(Self::default()),
            Value::Array(a) if a.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(ApiError::MissingOrInvalidField {
                    field: "LanguageStrings".into(),
                    j: j.to_owned(),
                })
            }
        };
        let ls = map
            .values()
            .map(|v| {
                let ls: LanguageString = serde_json::from_value(v.to_owned())?;
                Ok((ls.language().to_owned(), ls.value().to_owned()))
            })
            .collect::<Result<HashMap<String, String>, ApiError>>()?;
        Ok(Self { ls })
    }

    /// Returns the value for a language.
    pub fn get_lang<S: Into<String>>(&self, language: S) -> Option<&str> {
        self.ls.get(&language.into()).map(|s| s.as_str())
    }

    /// Returns true if there is a value for the language.
    pub fn has_language<S: Into<String>>(&self, language: S) -> bool {
        self.ls.contains_key(&language.into())
    }

    /// Sets the value for a language.
    pub fn insert(&mut self, ls: LanguageString) {
        self.ls.insert(ls.language().to_owned(), ls.value().to_owned());
    }

    /// Returns the number of languages.
    pub fn len(&self) -> usize {
        self.ls.len()
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.ls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let j = json!({
            "en": {"language": "en", "value": "Douglas Adams"},
            "de": {"language": "de", "value": "Douglas Adams"}
        });
        let labels = LanguageStrings::from_json(&j).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get_lang("en"), Some("Douglas Adams"));
        assert!(labels.has_language("de"));
        assert!(!labels.has_language("fr"));
    }

    #[test]
    fn test_from_json_empty() {
        assert!(LanguageStrings::from_json(&json!([])).unwrap().is_empty());
        assert!(LanguageStrings::from_json(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(LanguageStrings::from_json(&json!(12345)).is_err());
        assert!(LanguageStrings::from_json(&json!({"en": 12345})).is_err());
    }

    #[test]
    fn test_insert() {
        let mut labels = LanguageStrings::default();
        assert!(labels.is_empty());
        labels.insert(LanguageString::new("en", "label"));
        assert_eq!(labels.len(), 1);
        labels.insert(LanguageString::new("en", "other label"));
        assert_eq!(labels.get_lang("en"), Some("other label"));
    }
}
