use crate::{ApiError, Entity};
use serde_json::Value;

/// Turns a raw entity record from the action API into a typed [`Entity`].
///
/// Injected into services at construction so they can be tested with
/// substitute implementations.
pub trait EntityDeserializer {
    fn deserialize(&self, raw: &Value) -> Result<Entity, ApiError>;
}

/// The standard deserializer for `wbgetentities` JSON records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEntityDeserializer;

impl EntityDeserializer for JsonEntityDeserializer {
    fn deserialize(&self, raw: &Value) -> Result<Entity, ApiError> {
        Entity::from_json(raw)
    }
}
