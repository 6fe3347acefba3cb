//! Translation error types

use elastiwire_core::CollaboratorError;
use thiserror::Error;

/// Errors that can occur while translating an instance group
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A field the translation depends on was not set
    #[error("required field is missing: {field}")]
    RequiredFieldMissing { field: String },

    /// A collaborator lookup failed; passed through unchanged
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// The image resolver failed
    #[error("unable to resolve image \"{image}\": {source}")]
    ImageResolution {
        image: String,
        #[source]
        source: CollaboratorError,
    },

    /// The image resolver succeeded but found no image
    #[error("unable to resolve image \"{image}\": not found")]
    ImageNotFound { image: String },
}

impl TranslateError {
    pub fn required_field(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }

    pub fn image_not_found(image: impl Into<String>) -> Self {
        Self::ImageNotFound {
            image: image.into(),
        }
    }
}

/// Result type for translation
pub type TranslateResult<T> = Result<T, TranslateError>;
