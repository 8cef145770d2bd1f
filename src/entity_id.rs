use std::fmt;

use crate::ApiError;

/// Entity ID letters for a specific wiki.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    item_letter: char,
    property_letter: char,
}

impl Config {
    pub const fn new(item_letter: char, property_letter: char) -> Config {
        Config {
            item_letter,
            property_letter,
        }
    }

    pub const fn item_letter(&self) -> char {
        self.item_letter
    }

    pub const fn property_letter(&self) -> char {
        self.property_letter
    }
}

pub const WIKIDATA_CONFIG: Config = Config {
    item_letter: 'Q',
    property_letter: 'P',
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EntityId {
    #[default]
    None,
    Item(String),
    Property(String),
}

impl EntityId {
    /// Returns the prefixed ID string of the entity, e.g. "Q42".
    pub const fn serialization(&self) -> Result<&String, ApiError> {
        match self {
            EntityId::None => Err(ApiError::IsNone),
            EntityId::Item(id) => Ok(id),
            EntityId::Property(id) => Ok(id),
        }
    }

    /// Returns the entity type of the entity.
    pub const fn entity_type(&self) -> Result<&str, ApiError> {
        match self {
            EntityId::Item(_) => Ok("item"),
            EntityId::Property(_) => Ok("property"),
            EntityId::None => Err(ApiError::IsNone),
        }
    }

    /// Creates a new entity ID from a string, using the default Wikidata configuration.
    pub fn new<S: Into<String>>(id: S) -> Result<EntityId, ApiError> {
        Self::new_from_config(id, &WIKIDATA_CONFIG)
    }

    /// Creates a new entity ID from a string, using a bespoke configuration.
    pub fn new_from_config<S: Into<String>>(id: S, config: &Config) -> Result<EntityId, ApiError> {
        let id = id.into();
        if id.starts_with(config.item_letter()) {
            Ok(EntityId::Item(id))
        } else if id.starts_with(config.property_letter()) {
            Ok(EntityId::Property(id))
        } else {
            Err(ApiError::UnknownEntityLetter(id))
        }
    }

    /// Returns an unset (None) entity ID.
    pub const fn none() -> EntityId {
        EntityId::None
    }

    /// Returns a new entity ID for an item.
    pub fn item<S: Into<String>>(s: S) -> EntityId {
        EntityId::Item(s.into())
    }

    /// Returns a new entity ID for a property.
    pub fn property<S: Into<String>>(s: S) -> EntityId {
        EntityId::Property(s.into())
    }

    /// Returns true if the entity ID is an item or a property.
    pub fn is_some(&self) -> bool {
        *self != EntityId::None
    }

    /// Returns true if the entity ID is unset (None).
    pub fn is_none(&self) -> bool {
        *self == EntityId::None
    }
}

impl From<EntityId> for String {
    fn from(val: EntityId) -> Self {
        match val {
            EntityId::Item(id) => id,
            EntityId::Property(id) => id,
            EntityId::None => String::new(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Item(id) => write!(f, "{}", id),
            EntityId::Property(id) => write!(f, "{}", id),
            EntityId::None => Err(fmt::Error),
        }
    }
}
