// Traits
pub use crate::action_api::ActionApi;
pub use crate::entity_deserializer::EntityDeserializer;

// Structs and enums
pub use crate::action_api::MediawikiApi;
pub use crate::alias_group::AliasGroup;
pub use crate::alias_group_setter::AliasGroupSetter;
pub use crate::aliases::Aliases;
pub use crate::data_type::DataType;
pub use crate::entity::{Entity, EntityType};
pub use crate::entity_content::EntityContent;
pub use crate::entity_deserializer::JsonEntityDeserializer;
pub use crate::entity_id::EntityId;
pub use crate::entity_target::EntityTarget;
pub use crate::error::ApiError;
pub use crate::item::Item;
pub use crate::language_string::{Language, LanguageString};
pub use crate::language_strings::LanguageStrings;
pub use crate::property::Property;
pub use crate::revision::Revision;
pub use crate::revision_getter::RevisionGetter;
pub use crate::sitelink::Sitelink;
pub use crate::sitelinks::Sitelinks;
