//! Completion policies.
//!
//! - `Policy::Strict` leaves unresolved fields unknown.
//! - `Policy::Lenient` substitutes the canonical defaults
//!   ([`DoorSpecification::canonical_default`]) for every unresolved field and
//!   never touches a resolved one.
//!
//! Lenient completion runs in two steps so the structural invariants hold in
//! the completed record: the independent fields (type, height, bucket,
//! handle) are defaulted first, derivations are re-run over them, and only
//! then are the remaining gaps filled.

use super::derive::derive;
use super::draft::Draft;
use super::trace::Provenance;
use crate::{CutoutKind, DoorSpecification, Field, Mode, Policy, TriState};

pub(crate) fn complete(draft: &mut Draft, policy: Policy, mode: Mode) {
    match policy {
        Policy::Strict => {}
        Policy::Lenient => {
            let defaults = DoorSpecification::canonical_default();
            fill_independent(draft, &defaults);
            derive(draft, mode);
            fill_remaining(draft, &defaults);
        }
    }
}

fn fill<T: Copy>(slot: &mut TriState<T>, default: TriState<T>) -> bool {
    let was_unknown = slot.is_unknown();
    *slot = slot.or(default);
    was_unknown
}

fn fill_independent(draft: &mut Draft, defaults: &DoorSpecification) {
    let spec = &mut draft.spec;
    let filled = [
        (Field::DoorType, fill(&mut spec.door_type, defaults.door_type)),
        (Field::DoorHeight, fill(&mut spec.door_height_inches, defaults.door_height_inches)),
        (Field::BucketType, fill(&mut spec.bucket_type, defaults.bucket_type)),
        (Field::HandleType, fill(&mut spec.handle_type, defaults.handle_type)),
    ];
    mark_defaulted(draft, &filled);
}

fn fill_remaining(draft: &mut Draft, defaults: &DoorSpecification) {
    let spec = &mut draft.spec;
    let mut filled = vec![
        (Field::ArcRated, fill(&mut spec.arc_rated, defaults.arc_rated)),
        (Field::DoorThickness, fill(&mut spec.door_thickness_gauge, defaults.door_thickness_gauge)),
    ];
    for kind in CutoutKind::ALL {
        let mut value = spec.cutouts.get(kind);
        let was_filled = fill(&mut value, defaults.cutouts.get(kind));
        spec.cutouts.set(kind, value);
        filled.push((Field::Cutout(kind), was_filled));
    }
    mark_defaulted(draft, &filled);
}

fn mark_defaulted(draft: &mut Draft, filled: &[(Field, bool)]) {
    for &(field, was_filled) in filled {
        if was_filled {
            tracing::debug!(%field, value = %draft.spec.value_label(field), "default applied");
            draft.mark(field, Provenance::Defaulted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BucketType, DoorType, Evidence};

    #[test]
    fn strict_leaves_gaps() {
        let mut draft = Draft::new();
        complete(&mut draft, Policy::Strict, Mode::Document);
        assert_eq!(draft.spec, DoorSpecification::unknown());
    }

    #[test]
    fn lenient_on_empty_draft_gives_canonical_default() {
        let mut draft = Draft::new();
        complete(&mut draft, Policy::Lenient, Mode::Conversation);
        assert_eq!(draft.spec, DoorSpecification::canonical_default());
        assert_eq!(draft.provenance(Field::DoorType), Provenance::Defaulted);
        // Arc rating follows the defaulted type instead of being defaulted itself.
        assert_eq!(draft.provenance(Field::ArcRated), Provenance::Derived { from: "Type" });
        assert_eq!(draft.provenance(Field::Cutout(CutoutKind::Fan)), Provenance::Defaulted);
    }

    #[test]
    fn lenient_never_overrides_resolved_values() {
        let mut draft = Draft::new();
        draft.record_match(Field::DoorType, Evidence::DoorType(DoorType::FreedomPlusFlashGard), "t");
        draft.record_match(Field::BucketType, Evidence::Bucket(BucketType::DriveBucket), "b");
        draft.record_match(Field::DoorHeight, Evidence::Height(72), "h");
        derive(&mut draft, Mode::Conversation);
        complete(&mut draft, Policy::Lenient, Mode::Conversation);

        assert_eq!(draft.spec.door_type, TriState::Known(DoorType::FreedomPlusFlashGard));
        assert_eq!(draft.spec.door_height_inches, TriState::Known(72));
        assert_eq!(draft.spec.door_thickness_gauge, TriState::Known(12));
        assert_eq!(draft.spec.cutouts.reset, TriState::Known(true));
        // No rototract mention in conversation mode.
        assert_eq!(draft.spec.cutouts.roto_tract, TriState::Known(false));
        assert!(draft.spec.is_complete());
        assert!(draft.spec.violations().is_empty());
    }

    #[test]
    fn defaulted_type_overrides_matched_gauge() {
        let mut draft = Draft::new();
        draft.record_match(Field::DoorThickness, Evidence::Gauge(12), "gauge");
        derive(&mut draft, Mode::Conversation);
        complete(&mut draft, Policy::Lenient, Mode::Conversation);
        assert_eq!(draft.spec.door_thickness_gauge, TriState::Known(14));
        assert!(draft.spec.violations().is_empty());
    }
}
