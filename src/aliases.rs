use crate::{ApiError, LanguageString};
use serde_json::Value;
use std::collections::HashMap;

/// The alias lists of an entity, grouped by language.
///
/// Parses the action API shape `{"en": [{"language": "en", "value": "…"}, …]}`;
/// an empty array or an absent member is an empty collection (formatversion=1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aliases {
    aliases: HashMap<String, Vec<String>>,
}

impl Aliases {
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let map = match j {
            Value::Null => return Ok(Self::default()),
            Value::Array(a) if a.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(ApiError::MissingOrInvalidField {
                    field: "Aliases".into(),
                    j: j.to_owned(),
                })
            }
        };
        let aliases = map
            .iter()
            .map(|(language, group)| {
                let values = group
                    .as_array()
                    .ok_or_else(|| ApiError::MissingOrInvalidField {
                        field: "Aliases".into(),
                        j: group.to_owned(),
                    })?
                    .iter()
                    .map(|v| {
                        let ls: LanguageString = serde_json::from_value(v.to_owned())?;
                        Ok(ls.value().to_owned())
                    })
                    .collect::<Result<Vec<String>, ApiError>>()?;
                Ok((language.to_owned(), values))
            })
            .collect::<Result<HashMap<String, Vec<String>>, ApiError>>()?;
        Ok(Self { aliases })
    }

    /// Returns the aliases for a language, in order; empty if the language has none.
    pub fn get_lang<S: Into<String>>(&self, language: S) -> Vec<&str> {
        self.aliases
            .get(&language.into())
            .map(|values| values.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    /// Returns true if there are aliases for the language.
    pub fn has_language<S: Into<String>>(&self, language: S) -> bool {
        self.aliases.contains_key(&language.into())
    }

    /// Adds an alias (only if it is not already present for its language).
    pub fn insert(&mut self, ls: LanguageString) {
        let values = self.aliases.entry(ls.language().to_owned()).or_default();
        if !values.contains(ls.value()) {
            values.push(ls.value().to_owned());
        }
    }

    /// Returns the number of languages with aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if there are no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let j = json!({
            "en": [
                {"language": "en", "value": "Douglas Noël Adams"},
                {"language": "en", "value": "DNA"}
            ]
        });
        let aliases = Aliases::from_json(&j).unwrap();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get_lang("en"), vec!["Douglas Noël Adams", "DNA"]);
        assert!(aliases.get_lang("de").is_empty());
        assert!(aliases.has_language("en"));
    }

    #[test]
    fn test_from_json_empty() {
        assert!(Aliases::from_json(&json!([])).unwrap().is_empty());
        assert!(Aliases::from_json(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Aliases::from_json(&json!("foo")).is_err());
        assert!(Aliases::from_json(&json!({"en": "foo"})).is_err());
        assert!(Aliases::from_json(&json!({"en": [12345]})).is_err());
    }

    #[test]
    fn test_insert() {
        let mut aliases = Aliases::default();
        aliases.insert(LanguageString::new("en", "alias"));
        aliases.insert(LanguageString::new("en", "alias"));
        assert_eq!(aliases.get_lang("en"), vec!["alias"]);
        aliases.insert(LanguageString::new("en", "other"));
        assert_eq!(aliases.get_lang("en").len(), 2);
    }
}
