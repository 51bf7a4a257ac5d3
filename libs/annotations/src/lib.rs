//! # stableset-annotations
//!
//! Persistence for the reserved-slot set on an annotated identity
//! object.
//!
//! The reservation set's single source of truth is an annotation on
//! the workload's identity object: a JSON array of non-negative
//! integers under a well-known key. This crate owns that encoding and
//! nothing else; the ordinal math lives in `stableset-ordinals`.
//!
//! The store is deliberately decoupled from any concrete object
//! shape: anything implementing [`AnnotatedObject`] (get/set/remove
//! of a string-keyed annotation) can carry reservations, including a
//! plain `BTreeMap<String, String>` in tests.

mod error;
mod object;
mod store;

pub use error::AnnotationError;
pub use object::AnnotatedObject;
pub use store::{
    add_reserved_slots, read_reserved_slots, write_reserved_slots, RESERVED_SLOTS_ANNOTATION,
};
