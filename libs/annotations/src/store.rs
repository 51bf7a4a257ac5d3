//! Reading and writing the reserved-slot annotation.

use stableset_ordinals::{Ordinal, ReservedSlots};
use tracing::debug;

use crate::error::AnnotationError;
use crate::object::AnnotatedObject;

/// The well-known annotation key holding the reserved-slot set.
///
/// The value is a JSON array of non-negative 32-bit integers. Array
/// order carries no meaning; duplicates collapse into the set.
pub const RESERVED_SLOTS_ANNOTATION: &str = "stableset.dev/reserved-slots";

/// Reads the reserved-slot set from the object's annotations.
///
/// An absent key, an empty array, and a malformed value all yield the
/// empty set. Decode failures are logged at debug and never
/// propagated; callers needing strict validation must validate
/// upstream.
pub fn read_reserved_slots<O>(object: &O) -> ReservedSlots
where
    O: AnnotatedObject + ?Sized,
{
    let Some(raw) = object.annotation(RESERVED_SLOTS_ANNOTATION) else {
        return ReservedSlots::new();
    };

    match serde_json::from_str::<Vec<Ordinal>>(raw) {
        Ok(ordinals) => ordinals.into_iter().collect(),
        Err(error) => {
            debug!(%error, value = raw, "ignoring malformed reserved-slots annotation");
            ReservedSlots::new()
        }
    }
}

/// Writes the reserved-slot set to the object's annotations.
///
/// An empty set removes the key entirely; absence and empty-set are
/// equivalent on disk. Otherwise the set is stored as a sorted JSON
/// array under [`RESERVED_SLOTS_ANNOTATION`].
pub fn write_reserved_slots<O>(
    object: &mut O,
    slots: &ReservedSlots,
) -> Result<(), AnnotationError>
where
    O: AnnotatedObject + ?Sized,
{
    if slots.is_empty() {
        object.remove_annotation(RESERVED_SLOTS_ANNOTATION);
        return Ok(());
    }

    let ordinals: Vec<Ordinal> = slots.iter().collect();
    let encoded = serde_json::to_string(&ordinals)?;
    object.set_annotation(RESERVED_SLOTS_ANNOTATION, encoded);
    Ok(())
}

/// Adds reservations to the object's stored set.
///
/// Reads the current set, unions in `additional`, and writes the
/// result back. Adding an already-reserved ordinal is a no-op.
pub fn add_reserved_slots<O>(
    object: &mut O,
    additional: &ReservedSlots,
) -> Result<(), AnnotationError>
where
    O: AnnotatedObject + ?Sized,
{
    let merged = read_reserved_slots(object).union(additional);
    write_reserved_slots(object, &merged)
}
