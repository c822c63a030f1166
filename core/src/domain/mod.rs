//! Domain layer containing value objects.

pub mod value_objects;

pub use value_objects::*;
