use crate::{ApiError, EntityId, Item, Property};
use serde_json::Value;

/// The kind of a Wikibase entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityType {
    Item,
    Property,
}

impl EntityType {
    /// Returns the wire name of the entity type, as the `type` member declares it.
    pub const fn type_name(&self) -> &str {
        match self {
            EntityType::Item => "item",
            EntityType::Property => "property",
        }
    }
}

/// A typed Wikibase entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Item(Item),
    Property(Property),
}

impl Entity {
    /// Constructs an entity from a `wbgetentities` record, dispatching on its
    /// declared `type` tag. A tag with no typed counterpart here fails with
    /// `ApiError::UnsupportedEntityType`.
    pub fn from_json(j: &Value) -> Result<Self, ApiError> {
        match j["type"].as_str() {
            Some("item") => Ok(Entity::Item(Item::from_json(j)?)),
            Some("property") => Ok(Entity::Property(Property::from_json(j)?)),
            Some(other) => Err(ApiError::UnsupportedEntityType(other.to_string())),
            None => Err(ApiError::MissingOrInvalidField {
                field: "type".into(),
                j: j.to_owned(),
            }),
        }
    }

    /// Returns the ID of the entity; may be unset for a freshly built entity.
    pub fn id(&self) -> EntityId {
        match self {
            Entity::Item(item) => item.id(),
            Entity::Property(property) => property.id(),
        }
    }

    /// Returns the type of the entity.
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Entity::Item(_) => EntityType::Item,
            Entity::Property(_) => EntityType::Property,
        }
    }
}
