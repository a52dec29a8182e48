use crate::{BASE_PACKAGE, BASE_SUFFIX, prelude::*};
use amfgen_utils::case;

///
/// Record
///
/// Value-object metadata for one database-backed record class. Properties
/// are held sorted by name; associations keep their mapping-declared order.
///

#[derive(Clone, Debug, Serialize)]
pub struct Record {
    pub name: String,
    pub properties: Vec<Property>,
    pub associations: Vec<AssociationProperty>,
    pub package: String,
    pub base_package: String,
    pub collection: CollectionKind,
    pub source: SourceClass,
}

impl Record {
    pub fn new(
        source: SourceClass,
        root_package: Option<&str>,
        config: &Config,
    ) -> Result<Self, Error> {
        let name = source.name().ok_or(Error::EmptyClassPath)?.to_string();

        // Value-object packages are lower-camel per segment on the
        // ActionScript side.
        let relative = source.namespace_package();
        let dotted = case::join_dotted([root_package.unwrap_or_default(), relative.as_str()]);
        let package = dotted
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(case::camel)
            .collect::<Vec<_>>()
            .join(".");
        let base_package = case::join_dotted([package.as_str(), BASE_PACKAGE]);

        // The ignore set speaks the server's casing, so filter on the raw
        // identifier before any translation.
        let mut properties: Vec<Property> = source
            .columns
            .iter()
            .filter(|column| !config.is_ignored(&column.ident))
            .map(|column| Property::from_column(column, config))
            .collect();
        properties.sort_by(|a, b| a.name.cmp(&b.name));

        let associations = config
            .mapping_for_actionscript(&name)
            .map(|mapping| {
                mapping
                    .associations
                    .iter()
                    .map(|assoc| AssociationProperty::new(assoc, config))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            name,
            properties,
            associations,
            package,
            base_package,
            collection: config.collection,
            source,
        })
    }

    #[must_use]
    pub fn base_name(&self) -> String {
        format!("{}{BASE_SUFFIX}", self.name)
    }

    /// True when the source class sits directly under the ORM base class.
    #[must_use]
    pub fn is_base_class(&self) -> bool {
        matches!(self.source.superclass, Some(Superclass::OrmBase))
    }
}

///
/// TESTS
///
