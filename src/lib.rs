#![forbid(unsafe_code)]
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::float_equality_without_abs,
    keyword_idents,
    clippy::missing_const_for_fn,
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::missing_panics_doc,
    clippy::mod_module_files,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::suspicious_operation_groupings,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

//! **Wikibase Action API** is a Rust library for working with Wikibase
//! entities through the [MediaWiki action API](https://www.mediawiki.org/wiki/API:Main_page)
//! (`api.php`) of a [Wikibase](https://www.mediawiki.org/wiki/Wikibase)
//! instance. It provides a typed data model for items and properties, and
//! two services over an injected transport: one to fetch an entity's current
//! revision (`wbgetentities`) and one to set its aliases (`wbsetaliases`).

pub mod action_api;
pub mod alias_group;
pub mod alias_group_setter;
pub mod aliases;
pub mod data_type;
pub mod entity;
pub mod entity_content;
pub mod entity_deserializer;
pub mod entity_id;
pub mod entity_target;
pub mod error;
pub mod item;
pub mod language_string;
pub mod language_strings;
pub mod prelude;
pub mod property;
pub mod revision;
pub mod revision_getter;
pub mod sitelink;
pub mod sitelinks;

pub use action_api::{ActionApi, MediawikiApi, MediawikiApiBuilder};
pub use alias_group::AliasGroup;
pub use alias_group_setter::AliasGroupSetter;
pub use aliases::Aliases;
pub use data_type::DataType;
pub use entity::Entity;
pub use entity_content::EntityContent;
pub use entity_deserializer::{EntityDeserializer, JsonEntityDeserializer};
pub use entity_id::EntityId;
pub use entity_target::EntityTarget;
pub use error::{ApiError, ApiErrorPayload};
pub use item::Item;
pub use language_string::{Language, LanguageString};
pub use language_strings::LanguageStrings;
pub use property::Property;
pub use revision::Revision;
pub use revision_getter::RevisionGetter;
pub use sitelink::Sitelink;
pub use sitelinks::Sitelinks;
