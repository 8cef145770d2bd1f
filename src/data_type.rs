use crate::ApiError;
use std::{fmt, str::FromStr};

/// The value data type of a property.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DataType {
    #[default]
    String,
    WikibaseItem,
    WikibaseProperty,
    ExternalId,
    Url,
    Time,
    GlobeCoordinate,
    Quantity,
    Monolingualtext,
    CommonsMedia,
    GeoShape,
    TabularData,
    Math,
    MusicalNotation,
    Lexeme,
    Form,
    Sense,
    EntitySchema,
}

impl DataType {
    /// Returns the wire name of the data type.
    pub const fn as_str(&self) -> &str {
        match self {
            DataType::String => "string",
            DataType::WikibaseItem => "wikibase-item",
            DataType::WikibaseProperty => "wikibase-property",
            DataType::ExternalId => "external-id",
            DataType::Url => "url",
            DataType::Time => "time",
            DataType::GlobeCoordinate => "globe-coordinate",
            DataType::Quantity => "quantity",
            DataType::Monolingualtext => "monolingualtext",
            DataType::CommonsMedia => "commonsMedia",
            DataType::GeoShape => "geo-shape",
            DataType::TabularData => "tabular-data",
            DataType::Math => "math",
            DataType::MusicalNotation => "musical-notation",
            DataType::Lexeme => "wikibase-lexeme",
            DataType::Form => "wikibase-form",
            DataType::Sense => "wikibase-sense",
            DataType::EntitySchema => "entity-schema",
        }
    }
}

impl FromStr for DataType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DataType::String),
            "wikibase-item" => Ok(DataType::WikibaseItem),
            "wikibase-property" => Ok(DataType::WikibaseProperty),
            "external-id" => Ok(DataType::ExternalId),
            "url" => Ok(DataType::Url),
            "time" => Ok(DataType::Time),
            "globe-coordinate" => Ok(DataType::GlobeCoordinate),
            "quantity" => Ok(DataType::Quantity),
            "monolingualtext" => Ok(DataType::Monolingualtext),
            "commonsMedia" => Ok(DataType::CommonsMedia),
            "geo-shape" => Ok(DataType::GeoShape),
            "tabular-data" => Ok(DataType::TabularData),
            "math" => Ok(DataType::Math),
            "musical-notation" => Ok(DataType::MusicalNotation),
            "wikibase-lexeme" => Ok(DataType::Lexeme),
            "wikibase-form" => Ok(DataType::Form),
            "wikibase-sense" => Ok(DataType::Sense),
            "entity-schema" => Ok(DataType::EntitySchema),
            other => Err(ApiError::UnknownDataType(other.into())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
