//! Core data model types.
//!
//! The registry data is read-only for the lifetime of the process;
//! these types carry no interior mutability.

pub mod taxonomy;
pub mod template;

pub use taxonomy::{Taxonomy, TaxonomyEntry};
pub use template::{normalize_tag, TemplateRecord};
