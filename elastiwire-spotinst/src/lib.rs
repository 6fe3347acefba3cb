//! Elastiwire Spotinst translation
//!
//! Converts the provider-neutral instance group model from `elastiwire-core`
//! into the request shapes of the Spotinst Elastigroup and Ocean APIs.
//!
//! Every function here is pure apart from the two explicit collaborator
//! lookups (image resolution and machine type metadata), so they can be
//! called concurrently with independent inputs.

pub mod block_devices;
pub mod error;
pub mod orientation;
pub mod payload;
pub mod subnets;
pub mod tags;
pub mod taints;
pub mod volume;
pub mod wire;

pub use error::{TranslateError, TranslateResult};
pub use orientation::{Orientation, normalize_orientation};
pub use payload::Translator;
