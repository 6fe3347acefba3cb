//! Collaborator - Traits abstracting the lookups translation depends on
//!
//! Translation itself is pure. The only outside knowledge it needs is which
//! image an identifier refers to and which instance store devices a machine
//! type carries. Both lookups sit behind traits so that callers can back them
//! with a cloud API, a static catalog, or a test fake.

use crate::resource::{Image, MachineTypeInfo};

/// Error type for collaborator lookups
#[derive(Debug)]
pub struct CollaboratorError {
    pub message: String,
    /// What was being looked up (image identifier, machine type name)
    pub subject: Option<String>,
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref subject) = self.subject {
            write!(f, "{}: {}", self.message, subject)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for CollaboratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl CollaboratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            subject: None,
            cause: None,
        }
    }

    pub fn for_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Resolves machine images by identifier
pub trait ImageResolver: Send + Sync {
    /// Look up an image
    ///
    /// Returns `Ok(None)` when the lookup succeeded but no image matched.
    fn resolve_image(&self, name: &str) -> CollaboratorResult<Option<Image>>;
}

/// Machine type metadata catalog
pub trait MachineTypeCatalog: Send + Sync {
    /// Get metadata for a machine type (e.g., "m5d.large")
    fn machine_type_info(&self, name: &str) -> CollaboratorResult<MachineTypeInfo>;
}

impl ImageResolver for Box<dyn ImageResolver> {
    fn resolve_image(&self, name: &str) -> CollaboratorResult<Option<Image>> {
        (**self).resolve_image(name)
    }
}

impl MachineTypeCatalog for Box<dyn MachineTypeCatalog> {
    fn machine_type_info(&self, name: &str) -> CollaboratorResult<MachineTypeInfo> {
        (**self).machine_type_info(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    struct NoImages;

    impl ImageResolver for NoImages {
        fn resolve_image(&self, _name: &str) -> CollaboratorResult<Option<Image>> {
            Ok(None)
        }
    }

    #[test]
    fn error_display_includes_subject() {
        let error = CollaboratorError::new("unknown machine type").for_subject("x9.huge");
        assert_eq!(error.to_string(), "unknown machine type: x9.huge");

        let error = CollaboratorError::new("throttled");
        assert_eq!(error.to_string(), "throttled");
    }

    #[test]
    fn error_exposes_cause_as_source() {
        let io = std::io::Error::other("connection reset");
        let error = CollaboratorError::new("describe images failed").with_cause(io);
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn boxed_resolver_delegates() {
        let resolver: Box<dyn ImageResolver> = Box::new(NoImages);
        assert!(resolver.resolve_image("ami-123").unwrap().is_none());
    }
}
