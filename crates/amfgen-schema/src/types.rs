use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// ValueKind
///
/// Tag describing how a column's values are represented, attached by the
/// reflection side of the generator.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueKind {
    Date,
    Number,
    Object,
    Text,
    Time,
}

///
/// ColumnType
///
/// Declared migration type of a column.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum ColumnType {
    Binary,
    Boolean,
    Date,
    Datetime,
    Decimal,
    Float,
    Integer,
    String,
    Text,
    Time,
    Timestamp,
}

///
/// StaticType
///
/// ActionScript-side property type emitted for a column.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum StaticType {
    Boolean,
    Date,
    Number,
    Object,
    String,
}

impl StaticType {
    /// Resolve a column description to its ActionScript property type.
    ///
    /// Total over every `(ValueKind, ColumnType)` pair; combinations with
    /// no better mapping degrade to `Object`.
    #[must_use]
    pub const fn of(column: &Column) -> Self {
        match (column.value, column.ty) {
            (ValueKind::Text, _) => Self::String,
            (ValueKind::Number, _) => Self::Number,
            (ValueKind::Object, ColumnType::Boolean) => Self::Boolean,
            (ValueKind::Time | ValueKind::Date, _) => Self::Date,
            (ValueKind::Object, _) => Self::Object,
        }
    }
}

///
/// CollectionKind
///
/// ActionScript collection class used for multi-valued associations.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum CollectionKind {
    #[default]
    Array,
    ArrayCollection,
}

///
/// TESTS
///
