pub mod config;
pub mod node;
pub mod source;
pub mod types;

use thiserror::Error as ThisError;

/// Prefix applied to every generated remote proxy class name.
pub const REMOTE_PREFIX: &str = "Remote";

/// Suffix stripped from controller class names.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Sub-package holding the generated base classes.
pub const BASE_PACKAGE: &str = "base";

/// Suffix applied to generated base class names.
pub const BASE_SUFFIX: &str = "Base";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        config::{ClassMapping, Config},
        node::*,
        source::{Column, SourceClass, Superclass},
        types::{CollectionKind, ColumnType, StaticType, ValueKind},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("source class has an empty path")]
    EmptyClassPath,
}
