//! Elastiwire Core
//!
//! Provider-neutral model of instance group resources, plus the lookup
//! collaborators (image resolution, machine type metadata) that translation
//! layers depend on.

pub mod catalog;
pub mod collaborator;
pub mod config;
pub mod json_file;
pub mod resource;

pub use collaborator::{CollaboratorError, CollaboratorResult, ImageResolver, MachineTypeCatalog};
pub use config::TranslateConfig;
pub use json_file::LoadError;
