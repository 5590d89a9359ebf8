//! Kind catalog: definitions and the pool they are selected from.

pub mod kind;
pub mod registry;

pub use kind::KindDef;
pub use registry::KindCatalog;
