//! The ordinal allocation algorithms.
//!
//! Given a desired replica count and the reserved-slot set, the
//! allocator resolves:
//!
//! - The **boundary** (max replica count): the exclusive upper bound
//!   of the logical index range that, after removing consumed
//!   reservations, yields exactly the desired number of active
//!   ordinals.
//! - The **consumed** subset: reservations below the boundary, which
//!   actively punch holes in the range. Reservations at or above the
//!   boundary are latent and have no effect yet.
//! - The **active set**: `[0, boundary)` minus the consumed subset.
//!
//! # Invariants
//!
//! - `|active_ordinals(n, r)| == n` for every `n >= 0` and finite `r`
//! - The boundary is non-decreasing in the replica count
//! - Scale-out only ever assigns ordinals strictly above the current
//!   maximum, skipping reserved ones

use crate::error::{OrdinalError, OrdinalResult};
use crate::types::{Ordinal, OrdinalSet, ReservedSlots};

/// Outcome of resolving the boundary for a replica count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryResolution {
    /// Exclusive upper bound of the logical index range.
    pub max_replica_count: u32,

    /// Reservations that fell inside the range and were consumed.
    pub consumed: ReservedSlots,
}

fn check_replicas(replicas: i32) -> OrdinalResult<u32> {
    u32::try_from(replicas).map_err(|_| OrdinalError::NegativeReplicas(replicas))
}

/// Resolves the boundary and the consumed reservation subset for the
/// given replica count.
///
/// The scan visits reservations in ascending order. Each reservation
/// below the current boundary removes one slot from the range, so the
/// boundary grows by one to compensate and the reservation is kept as
/// consumed. Reservations at or above the boundary are dropped: they
/// are not reached yet. Ascending order is required because the
/// boundary only grows during the scan; a reservation just below the
/// final boundary counts only if every smaller reservation has
/// already been accounted for.
///
/// Runs in O(|reserved|).
pub fn resolve_boundary(
    replicas: i32,
    reserved: &ReservedSlots,
) -> OrdinalResult<BoundaryResolution> {
    let mut boundary = check_replicas(replicas)?;
    let mut consumed = ReservedSlots::new();

    for slot in reserved.iter() {
        if slot.value() < boundary {
            boundary += 1;
            consumed.insert(slot);
        }
    }

    Ok(BoundaryResolution {
        max_replica_count: boundary,
        consumed,
    })
}

/// Computes the set of ordinals that should have a live member.
///
/// The returned set always has exactly `replicas` elements.
pub fn active_ordinals(replicas: i32, reserved: &ReservedSlots) -> OrdinalResult<OrdinalSet> {
    let resolution = resolve_boundary(replicas, reserved)?;

    Ok((0..resolution.max_replica_count)
        .map(Ordinal::new)
        .filter(|ordinal| !resolution.consumed.contains(*ordinal))
        .collect())
}

/// Returns the highest active ordinal, or `None` when the active set
/// is empty (zero replicas).
pub fn max_active_ordinal(
    replicas: i32,
    reserved: &ReservedSlots,
) -> OrdinalResult<Option<Ordinal>> {
    Ok(active_ordinals(replicas, reserved)?.into_iter().next_back())
}

/// Returns the lowest active ordinal, or `None` when the active set
/// is empty (zero replicas).
pub fn min_active_ordinal(
    replicas: i32,
    reserved: &ReservedSlots,
) -> OrdinalResult<Option<Ordinal>> {
    Ok(active_ordinals(replicas, reserved)?.into_iter().next())
}

/// Computes the ordinals to assign when growing from `current` to
/// `target` replicas, in assignment order.
///
/// Returns an empty sequence when `target <= current`; this function
/// only computes growth. Otherwise candidates start just past the
/// current maximum active ordinal and walk upward, skipping any
/// ordinal in the full reservation set. The full set is consulted
/// rather than the consumed subset because a latent reservation above
/// the current boundary must still be honored once growth reaches it.
///
/// New members never fill gaps below the current maximum: only
/// explicit reservations create gaps, organic growth is strictly
/// monotonic.
pub fn scale_out_ordinals(
    current: i32,
    target: i32,
    reserved: &ReservedSlots,
) -> OrdinalResult<Vec<Ordinal>> {
    if target <= current {
        return Ok(Vec::new());
    }

    // Base is the maximum of the *current* active set, not the target's.
    let base = max_active_ordinal(current, reserved)?;
    let needed = (target - current) as usize;

    let mut candidate = match base {
        Some(ordinal) => ordinal.next(),
        None => Ordinal::new(0),
    };
    let mut assigned = Vec::with_capacity(needed);

    while assigned.len() < needed {
        if !reserved.contains(candidate) {
            assigned.push(candidate);
        }
        candidate = candidate.next();
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(values: &[u32]) -> ReservedSlots {
        values.iter().copied().collect()
    }

    fn values(set: &OrdinalSet) -> Vec<u32> {
        set.iter().map(|o| o.value()).collect()
    }

    #[test]
    fn test_active_ordinals_no_reservations() {
        let reserved = ReservedSlots::new();
        assert_eq!(values(&active_ordinals(3, &reserved).unwrap()), vec![0, 1, 2]);
        assert_eq!(
            max_active_ordinal(3, &reserved).unwrap(),
            Some(Ordinal::new(2))
        );
        assert_eq!(
            min_active_ordinal(3, &reserved).unwrap(),
            Some(Ordinal::new(0))
        );
    }

    #[test]
    fn test_resolve_boundary_consumes_inner_reservation() {
        // Reservations {2,4} with 3 replicas: 2 is consumed and grows
        // the boundary to 4; 4 is then at the boundary and stays latent.
        let resolution = resolve_boundary(3, &slots(&[2, 4])).unwrap();
        assert_eq!(resolution.max_replica_count, 4);
        assert_eq!(resolution.consumed, slots(&[2]));
        assert_eq!(values(&active_ordinals(3, &slots(&[2, 4])).unwrap()), vec![0, 1, 3]);
    }

    #[test]
    fn test_resolve_boundary_chained_reservations() {
        // Each consumed reservation can pull the next one inside the
        // boundary.
        let resolution = resolve_boundary(1, &slots(&[0, 1, 2])).unwrap();
        assert_eq!(resolution.max_replica_count, 4);
        assert_eq!(resolution.consumed, slots(&[0, 1, 2]));
        assert_eq!(values(&active_ordinals(1, &slots(&[0, 1, 2])).unwrap()), vec![3]);
    }

    #[test]
    fn test_zero_replicas() {
        let reserved = slots(&[0, 1, 7]);
        let resolution = resolve_boundary(0, &reserved).unwrap();
        assert_eq!(resolution.max_replica_count, 0);
        assert!(resolution.consumed.is_empty());
        assert!(active_ordinals(0, &reserved).unwrap().is_empty());
        assert_eq!(max_active_ordinal(0, &reserved).unwrap(), None);
        assert_eq!(min_active_ordinal(0, &reserved).unwrap(), None);
    }

    #[test]
    fn test_latent_reservation_has_no_effect() {
        // 100 is far beyond the boundary for 3 replicas.
        let with_latent = active_ordinals(3, &slots(&[100])).unwrap();
        let without = active_ordinals(3, &ReservedSlots::new()).unwrap();
        assert_eq!(with_latent, without);
    }

    #[test]
    fn test_reservation_at_zero() {
        assert_eq!(values(&active_ordinals(3, &slots(&[0])).unwrap()), vec![1, 2, 3]);
        assert_eq!(
            min_active_ordinal(3, &slots(&[0])).unwrap(),
            Some(Ordinal::new(1))
        );
    }

    #[test]
    fn test_scale_out_skips_reservations() {
        // Current active ordinals are {0,1,3}; growth continues past 3,
        // skipping the reserved 4.
        let reserved = slots(&[2, 4]);
        let assigned = scale_out_ordinals(3, 5, &reserved).unwrap();
        assert_eq!(assigned, vec![Ordinal::new(5), Ordinal::new(6)]);
    }

    #[test]
    fn test_scale_out_from_zero() {
        let assigned = scale_out_ordinals(0, 2, &slots(&[0, 1])).unwrap();
        assert_eq!(assigned, vec![Ordinal::new(2), Ordinal::new(3)]);
    }

    #[test]
    fn test_scale_out_shrink_is_empty() {
        assert!(scale_out_ordinals(5, 3, &slots(&[2, 4])).unwrap().is_empty());
        assert!(scale_out_ordinals(3, 3, &ReservedSlots::new()).unwrap().is_empty());
        // Negative counts take the same early-out when not growing.
        assert!(scale_out_ordinals(-1, -5, &ReservedSlots::new()).unwrap().is_empty());
    }

    #[test]
    fn test_negative_replicas_rejected() {
        let reserved = ReservedSlots::new();
        assert_eq!(
            resolve_boundary(-1, &reserved),
            Err(OrdinalError::NegativeReplicas(-1))
        );
        assert_eq!(
            active_ordinals(-3, &reserved),
            Err(OrdinalError::NegativeReplicas(-3))
        );
        assert_eq!(
            max_active_ordinal(-1, &reserved),
            Err(OrdinalError::NegativeReplicas(-1))
        );
        assert_eq!(
            min_active_ordinal(-1, &reserved),
            Err(OrdinalError::NegativeReplicas(-1))
        );
        assert_eq!(
            scale_out_ordinals(-1, 2, &reserved),
            Err(OrdinalError::NegativeReplicas(-1))
        );
    }

    #[test]
    fn test_result_independent_of_input_order() {
        // The internal scan is order-dependent; the set structure must
        // make the call boundary order-independent.
        let ascending: ReservedSlots = [1u32, 3, 4, 7].into_iter().collect();
        let descending: ReservedSlots = [7u32, 4, 3, 1].into_iter().collect();
        let shuffled: ReservedSlots = [4u32, 1, 7, 3].into_iter().collect();

        let expected = resolve_boundary(5, &ascending).unwrap();
        assert_eq!(resolve_boundary(5, &descending).unwrap(), expected);
        assert_eq!(resolve_boundary(5, &shuffled).unwrap(), expected);
    }
}
