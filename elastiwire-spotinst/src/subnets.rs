//! Subnet set comparison

use std::collections::HashSet;

use elastiwire_core::resource::Subnet;

/// Compare two subnet lists by identifier, ignoring order and duplicates
///
/// A subnet on the right without an identifier makes the lists unequal.
/// Subnets on the left without an identifier never match anything.
pub fn subnets_equal_ignore_order(left: &[Subnet], right: &[Subnet]) -> bool {
    let left_ids: HashSet<Option<&str>> = left.iter().map(|s| s.id.as_deref()).collect();

    let mut right_ids = HashSet::with_capacity(right.len());
    for subnet in right {
        let Some(id) = subnet.id.as_deref() else {
            log::debug!("Subnet ID not set; returning not-equal: {:?}", subnet);
            return false;
        };
        right_ids.insert(Some(id));
    }

    left_ids == right_ids
}
