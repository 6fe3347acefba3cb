//! Tag and label mapping
//!
//! Each function turns a key/value map into the record list of one API
//! family. Output order follows map iteration and is unspecified; compare
//! results as sets.

use std::collections::HashMap;

use crate::wire::{elastigroup, ocean};

fn build_records<T>(
    entries: &HashMap<String, String>,
    record: impl Fn(String, String) -> T,
) -> Vec<T> {
    entries
        .iter()
        .map(|(key, value)| record(key.clone(), value.clone()))
        .collect()
}

/// Elastigroup instance tags
pub fn build_elastigroup_tags(tags: &HashMap<String, String>) -> Vec<elastigroup::Tag> {
    build_records(tags, |key, value| elastigroup::Tag { key, value })
}

/// Ocean instance tags
pub fn build_ocean_tags(tags: &HashMap<String, String>) -> Vec<ocean::Tag> {
    build_records(tags, |key, value| ocean::Tag { key, value })
}

/// Elastigroup auto-scaler node labels
pub fn build_auto_scale_labels(
    labels: &HashMap<String, String>,
) -> Vec<elastigroup::AutoScaleLabel> {
    build_records(labels, |key, value| elastigroup::AutoScaleLabel { key, value })
}

/// Ocean node labels
pub fn build_ocean_labels(labels: &HashMap<String, String>) -> Vec<ocean::Label> {
    build_records(labels, |key, value| ocean::Label { key, value })
}
