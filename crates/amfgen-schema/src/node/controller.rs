use crate::{BASE_PACKAGE, BASE_SUFFIX, CONTROLLER_SUFFIX, REMOTE_PREFIX, prelude::*};
use amfgen_utils::case;

///
/// Controller
///
/// Remote proxy metadata for one server-side controller class. Actions are
/// always held lexicographically sorted.
///

#[derive(Clone, Debug, Serialize)]
pub struct Controller {
    pub name: String,
    pub simple_name: String,
    pub actions: Vec<String>,
    pub package: String,
    pub base_package: String,
    pub source: SourceClass,
}

impl Controller {
    pub fn new(source: SourceClass, root_package: Option<&str>) -> Result<Self, Error> {
        let class_name = source.name().ok_or(Error::EmptyClassPath)?;

        // Strip the suffix once; a missing suffix leaves the name as-is.
        let simple_name = class_name
            .strip_suffix(CONTROLLER_SUFFIX)
            .unwrap_or(class_name)
            .to_string();
        let name = format!("{REMOTE_PREFIX}{simple_name}");

        let relative = source.namespace_package();
        let package = case::join_dotted([root_package.unwrap_or_default(), relative.as_str()]);
        let base_package = case::join_dotted([package.as_str(), BASE_PACKAGE]);

        let mut actions = source.methods.clone();
        actions.sort();

        Ok(Self {
            name,
            simple_name,
            actions,
            package,
            base_package,
            source,
        })
    }

    #[must_use]
    pub fn base_name(&self) -> String {
        format!("{}{BASE_SUFFIX}", self.name)
    }

    /// Package-qualified remote proxy name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        case::join_dotted([self.package.as_str(), self.name.as_str()])
    }

    /// Constant-style identifier, `RemotePost` -> `REMOTE_POST`.
    #[must_use]
    pub fn const_name(&self) -> String {
        case::constant(&self.name)
    }
}

///
/// TESTS
///
