use crate::{ApiError, Entity, EntityId, Sitelink};
use std::collections::HashMap;

/// The target of an entity write, identified directly by ID, by an entity
/// carrying its ID, or indirectly through a sitelink.
///
/// A closed union: anything that is not one of these three kinds does not
/// construct, so the only precondition left to check at call time is an
/// entity without an ID.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityTarget {
    Id(EntityId),
    Entity(Entity),
    SiteLink(Sitelink),
}

impl EntityTarget {
    /// Resolves the target into the wire parameters identifying it:
    /// `id` for an entity ID, `site`+`title` for a sitelink.
    pub fn params(&self) -> Result<HashMap<String, String>, ApiError> {
        match self {
            EntityTarget::Id(id) => Self::id_params(id),
            EntityTarget::Entity(entity) => match entity.id() {
                EntityId::None => Err(ApiError::MissingId),
                id => Self::id_params(&id),
            },
            EntityTarget::SiteLink(sitelink) => Ok(HashMap::from([
                ("site".to_string(), sitelink.site().to_string()),
                ("title".to_string(), sitelink.title().to_string()),
            ])),
        }
    }

    fn id_params(id: &EntityId) -> Result<HashMap<String, String>, ApiError> {
        Ok(HashMap::from([(
            "id".to_string(),
            id.serialization()?.to_string(),
        )]))
    }
}

impl From<EntityId> for EntityTarget {
    fn from(id: EntityId) -> Self {
        EntityTarget::Id(id)
    }
}

impl From<Entity> for EntityTarget {
    fn from(entity: Entity) -> Self {
        EntityTarget::Entity(entity)
    }
}

impl From<Sitelink> for EntityTarget {
    fn from(sitelink: Sitelink) -> Self {
        EntityTarget::SiteLink(sitelink)
    }
}
