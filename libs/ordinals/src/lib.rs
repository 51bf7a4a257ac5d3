//! # stableset-ordinals
//!
//! Stable ordinal allocation for replicated ordered workloads.
//!
//! Members of an ordered replica set are identified by non-negative
//! integer ordinals. Standard controllers assume ordinals occupy the
//! dense range `[0, N)`, so scaling in can only ever remove the
//! highest member. This crate lifts that restriction: an operator may
//! mark arbitrary ordinals as reserved, and the allocator computes
//! which ordinals are active for a given replica count with the
//! reserved slots skipped over.
//!
//! ## Design Principles
//!
//! - All functions are pure and deterministic: same inputs, same
//!   outputs, no I/O, no shared state
//! - The active set is always recomputed, never cached as
//!   authoritative state
//! - Reserved slots are consumed only below the resolved boundary;
//!   reservations beyond it stay latent until growth reaches them
//! - Growth extends strictly past the current maximum ordinal; gaps
//!   below it are created only by explicit reservations
//!
//! ## Example
//!
//! ```
//! use stableset_ordinals::{active_ordinals, Ordinal, ReservedSlots};
//!
//! let reserved: ReservedSlots = [2u32, 4].into_iter().collect();
//! let active = active_ordinals(3, &reserved).unwrap();
//!
//! let expected: Vec<u32> = vec![0, 1, 3];
//! assert_eq!(active.iter().map(|o| o.value()).collect::<Vec<_>>(), expected);
//! ```

mod alloc;
mod error;
mod types;

pub use alloc::{
    active_ordinals, max_active_ordinal, min_active_ordinal, resolve_boundary,
    scale_out_ordinals, BoundaryResolution,
};
pub use error::{OrdinalError, OrdinalResult};
pub use types::{Ordinal, OrdinalSet, ReservedSlots};
