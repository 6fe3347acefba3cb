//! Wire formats of the two Spotinst API families
//!
//! The Elastigroup and Ocean APIs define their own tag records with identical
//! shape. They are kept as separate types so that each payload only accepts
//! records of its own API family.

pub mod elastigroup;
pub mod ocean;
