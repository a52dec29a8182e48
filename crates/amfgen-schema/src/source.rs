use crate::prelude::*;
use amfgen_utils::case;

///
/// SourceClass
///
/// Plain-data description of one server-side class, produced by the
/// reflection side of the generator. `path` holds the namespace segments in
/// order, ending with the class's own name.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SourceClass {
    pub path: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<Superclass>,

    /// Locally declared instance methods, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
}

impl SourceClass {
    #[must_use]
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The class's own (short) name, the final path segment.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Namespace segments (all but the final), lower-cased and dot-joined.
    #[must_use]
    pub fn namespace_package(&self) -> String {
        let Some((_, namespace)) = self.path.split_last() else {
            return String::new();
        };

        let parts: Vec<String> = namespace.iter().map(|s| s.to_lowercase()).collect();

        case::join_dotted(parts.iter().map(String::as_str))
    }
}

///
/// Superclass
///
/// Identity of a class's direct parent. `OrmBase` marks a direct child of
/// the ORM's root record class; anything else (an STI parent, say) carries
/// its name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Superclass {
    OrmBase,
    Class(String),
}

///
/// Column
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Column {
    pub ident: String,
    pub ty: ColumnType,
    pub value: ValueKind,
}

impl Column {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: ColumnType, value: ValueKind) -> Self {
        Self {
            ident: ident.into(),
            ty,
            value,
        }
    }
}

///
/// TESTS
///
