//! ## Crate layout
//! - `schema`: source-class inputs, generator configuration, descriptor
//!   nodes, and ActionScript type conversion.
//! - `utils`: pure naming and case helpers shared by the schema crate and
//!   the template layer.
//!
//! The `prelude` module mirrors the surface a template renderer works
//! against: descriptor nodes plus the input and configuration types needed
//! to build them.

pub use amfgen_schema as schema;
pub use amfgen_utils as utils;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use amfgen_schema::Error;

///
/// Prelude
///

pub mod prelude {
    pub use amfgen_schema::{
        Error,
        config::{ClassMapping, Config},
        node::{AssociationProperty, Controller, Property, Record},
        source::{Column, SourceClass, Superclass},
        types::{CollectionKind, ColumnType, StaticType, ValueKind},
    };
}
