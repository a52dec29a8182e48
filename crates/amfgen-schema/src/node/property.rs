use crate::prelude::*;
use amfgen_utils::case;
use derive_more::Deref;

///
/// Property
///
/// One generated value-object property, backed by a column.
///

#[derive(Clone, Debug, Serialize)]
pub struct Property {
    pub name: String,
    pub static_type: String,
    pub accessor: String,
}

impl Property {
    #[must_use]
    pub fn from_column(column: &Column, config: &Config) -> Self {
        let name = translated(&column.ident, config);
        let static_type = StaticType::of(column).to_string();

        Self {
            accessor: name.clone(),
            name,
            static_type,
        }
    }
}

///
/// AssociationProperty
///
/// Property backed by a declared association rather than a column. The
/// static type is the mapped ActionScript class of the association's
/// target; the singular flag tells the renderer whether to wrap it in the
/// configured collection class.
///

#[derive(Clone, Debug, Deref, Serialize)]
pub struct AssociationProperty {
    #[deref]
    #[serde(flatten)]
    pub property: Property,

    pub singular: bool,
}

impl AssociationProperty {
    #[must_use]
    pub fn new(association: &str, config: &Config) -> Self {
        let name = translated(association, config);
        let singular_form = case::singularize(association);

        // Target lookup is keyed by the singularized, capitalized name; an
        // unmapped target degrades to Object.
        let static_type = config
            .mapping_for_class(&case::capitalize(&singular_form))
            .map_or_else(
                || StaticType::Object.to_string(),
                |mapping| mapping.actionscript.clone(),
            );

        Self {
            property: Property {
                accessor: name.clone(),
                name,
                static_type,
            },
            singular: association == singular_form,
        }
    }

    #[must_use]
    pub const fn is_singular(&self) -> bool {
        self.singular
    }
}

// Property and association names share one case rule.
fn translated(ident: &str, config: &Config) -> String {
    if config.translate_case {
        case::camel(ident)
    } else {
        ident.to_string()
    }
}

///
/// TESTS
///
