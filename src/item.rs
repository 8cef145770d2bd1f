use crate::{Aliases, ApiError, EntityId, LanguageStrings, Sitelinks};
use serde_json::Value;

/// A Wikibase item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    id: EntityId,
    labels: LanguageStrings,
    descriptions: LanguageStrings,
    aliases: Aliases,
    sitelinks: Sitelinks,
}

impl Item {
    /// Constructs an item from a `wbgetentities` entity record.
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        let id = j["id"]
            .as_str()
            .ok_or_else(|| ApiError::MissingOrInvalidField {
                field: "id".into(),
                j: j.to_owned(),
            })?;
        Ok(Self {
            id: EntityId::item(id),
            labels: LanguageStrings::from_json(&j["labels"])?,
            descriptions: LanguageStrings::from_json(&j["descriptions"])?,
            aliases: Aliases::from_json(&j["aliases"])?,
            sitelinks: Sitelinks::from_json(&j["sitelinks"])?,
        })
    }

    /// Returns the ID of the item.
    pub fn id(&self) -> EntityId {
        self.id.to_owned()
    }

    /// Returns the labels of the item.
    pub const fn labels(&self) -> &LanguageStrings {
        &self.labels
    }

    /// Returns the labels of the item (mutable).
    pub fn labels_mut(&mut self) -> &mut LanguageStrings {
        &mut self.labels
    }

    /// Returns the descriptions of the item.
    pub const fn descriptions(&self) -> &LanguageStrings {
        &self.descriptions
    }

    /// Returns the descriptions of the item (mutable).
    pub fn descriptions_mut(&mut self) -> &mut LanguageStrings {
        &mut self.descriptions
    }

    /// Returns the aliases of the item.
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Returns the aliases of the item (mutable).
    pub fn aliases_mut(&mut self) -> &mut Aliases {
        &mut self.aliases
    }

    /// Returns the sitelinks of the item.
    pub const fn sitelinks(&self) -> &Sitelinks {
        &self.sitelinks
    }

    /// Returns the sitelinks of the item (mutable).
    pub fn sitelinks_mut(&mut self) -> &mut Sitelinks {
        &mut self.sitelinks
    }
}
