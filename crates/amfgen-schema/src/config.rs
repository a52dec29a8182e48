use crate::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

///
/// Config
///
/// Immutable generator configuration, passed by reference into each
/// descriptor constructor. `Default` matches a bare generator run: nothing
/// ignored, server-side casing kept, plain `Array` collections, no
/// value-object mappings.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Column identifiers never emitted as properties.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub ignore_fields: BTreeSet<String>,

    /// Translate property and association names to lower camel case.
    #[serde(default)]
    pub translate_case: bool,

    /// Collection class used for multi-valued associations.
    #[serde(default)]
    pub collection: CollectionKind,

    /// Value-object mapping table, keyed by server-side record class name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, ClassMapping>,
}

impl Config {
    #[must_use]
    pub fn is_ignored(&self, ident: &str) -> bool {
        self.ignore_fields.contains(ident)
    }

    /// Keyed lookup by server-side record class name.
    #[must_use]
    pub fn mapping_for_class(&self, class: &str) -> Option<&ClassMapping> {
        self.mappings.get(class)
    }

    /// Find the mapping whose ActionScript-side name matches. Scans the
    /// table; absence means the class has nothing configured.
    #[must_use]
    pub fn mapping_for_actionscript(&self, name: &str) -> Option<&ClassMapping> {
        self.mappings.values().find(|m| m.actionscript == name)
    }
}

///
/// ClassMapping
///
/// One value-object mapping entry: the ActionScript-side type name and the
/// associations declared for the class, in declaration order.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassMapping {
    pub actionscript: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<String>,
}

impl ClassMapping {
    #[must_use]
    pub fn new(actionscript: impl Into<String>) -> Self {
        Self {
            actionscript: actionscript.into(),
            associations: Vec::new(),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            ignore_fields: ["id".to_string()].into(),
            mappings: BTreeMap::from([
                (
                    "Post".to_string(),
                    ClassMapping {
                        actionscript: "PostVO".to_string(),
                        associations: vec!["comments".to_string()],
                    },
                ),
                ("Comment".to_string(), ClassMapping::new("CommentVO")),
            ]),
            ..Config::default()
        }
    }

    #[test]
    fn defaults_match_a_bare_generator_run() {
        let config = Config::default();

        assert!(!config.translate_case);
        assert_eq!(config.collection, CollectionKind::Array);
        assert!(config.mappings.is_empty());
        assert!(!config.is_ignored("id"));
    }

    #[test]
    fn keyed_lookup_uses_the_server_class_name() {
        let config = config();

        assert_eq!(config.mapping_for_class("Post").map(|m| m.actionscript.as_str()), Some("PostVO"));
        assert!(config.mapping_for_class("PostVO").is_none());
        assert!(config.mapping_for_class("Author").is_none());
    }

    #[test]
    fn actionscript_lookup_scans_the_table() {
        let config = config();

        let mapping = config.mapping_for_actionscript("PostVO").unwrap();
        assert_eq!(mapping.associations, ["comments"]);
        assert!(config.mapping_for_actionscript("Post").is_none());
    }

    #[test]
    fn ignore_set_membership() {
        let config = config();

        assert!(config.is_ignored("id"));
        assert!(!config.is_ignored("title"));
    }
}
