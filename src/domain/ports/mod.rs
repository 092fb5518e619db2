//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod category_source;

pub use category_source::{CategorySource, DataSourceError};
