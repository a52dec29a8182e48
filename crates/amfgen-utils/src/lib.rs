//! Pure string helpers shared by the schema crate and the template layer.

pub mod case;
