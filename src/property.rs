use crate::{Aliases, ApiError, DataType, EntityId, LanguageStrings};
use serde_json::Value;

/// A Wikibase property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    id: EntityId,
    datatype: Option<DataType>,
    labels: LanguageStrings,
    descriptions: LanguageStrings,
    aliases: Aliases,
}

impl Property {
    /// Constructs a property from a `wbgetentities` entity record.
    /// The `datatype` member is optional; not every query asks for it.
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let id = j["id"]
            .as_str()
            .ok_or_else(|| ApiError::MissingOrInvalidField {
                field: "id".into(),
                j: j.to_owned(),
            })?;
        let datatype = match j["datatype"].as_str() {
            Some(s) => Some(s.parse()?),
            None => None,
        };
        Ok(Self {
            id: EntityId::property(id),
            datatype,
            labels: LanguageStrings::from_json(&j["labels"])?,
            descriptions: LanguageStrings::from_json(&j["descriptions"])?,
            aliases: Aliases::from_json(&j["aliases"])?,
        })
    }

    /// Returns the ID of the property.
    pub fn id(&self) -> EntityId {
        self.id.to_owned()
    }

    /// Returns the data type of the property, if known.
    pub const fn datatype(&self) -> Option<DataType> {
        self.datatype
    }

    /// Returns the labels of the property.
    pub const fn labels(&self) -> &LanguageStrings {
        &self.labels
    }

    /// Returns the labels of the property (mutable).
    pub fn labels_mut(&mut self) -> &mut LanguageStrings {
        &mut self.labels
    }

    /// Returns the descriptions of the property.
    pub const fn descriptions(&self) -> &LanguageStrings {
        &self.descriptions
    }

    /// Returns the descriptions of the property (mutable).
    pub fn descriptions_mut(&mut self) -> &mut LanguageStrings {
        &mut self.descriptions
    }

    /// Returns the aliases of the property.
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Returns the aliases of the property (mutable).
    pub fn aliases_mut(&mut self) -> &mut Aliases {
        &mut self.aliases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p214() -> Value {
        let v = std::fs::read_to_string("test_data/P214.json").unwrap();
        let v: Value = serde_json::from_str(&v).unwrap();
        v["entities"]["P214"].to_owned()
    }

    #[test]
    fn test_property_from_json() {
        let property = Property::from_json(&p214()).unwrap();
        assert_eq!(property.id(), EntityId::property("P214"));
        assert_eq!(property.datatype(), Some(DataType::ExternalId));
        assert_eq!(property.labels().get_lang("en"), Some("VIAF ID"));
        assert!(property.descriptions().has_language("en"));
    }

    #[test]
    fn test_property_from_json_no_datatype() {
        let mut j = p214();
        j.as_object_mut().unwrap().remove("datatype");
        let property = Property::from_json(&j).unwrap();
        assert_eq!(property.datatype(), None);
    }

    #[test]
    fn test_property_from_json_bad_datatype() {
        let mut j = p214();
        j["datatype"] = serde_json::json!("not-a-data-type");
        assert!(Property::from_json(&j).is_err());
    }

    #[test]
    fn test_property_from_json_no_id() {
        let err = Property::from_json(&serde_json::json!({"type": "property"})).unwrap_err();
        assert!(err.to_string().starts_with("missing or invalid field id"));
    }
}
