pub mod controller;
pub mod property;
pub mod record;

pub use controller::Controller;
pub use property::{AssociationProperty, Property};
pub use record::Record;
