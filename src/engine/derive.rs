//! Structural derivations.
//!
//! Some fields are a logical function of others rather than independent
//! textual evidence. Derivations run after matching and win over matched
//! values:
//!
//! ```text
//! Type ──▶ ArcRated ──▶ DoorThickness      (gauge text only used when
//!   │                                       arc rating is unresolved)
//!   └───▶ RotoTract cutout
//! BucketType ──▶ Reset cutout
//! ```
//!
//! Fan, Pemstud and DevicePanel cutouts have no derivation.
//!
//! `derive` is idempotent, so the lenient policy can re-run it after
//! defaulting the independent fields.

use super::draft::Draft;
use super::trace::Provenance;
use crate::{ARC_RATED_GAUGE, BucketType, CutoutKind, DoorType, Field, Mode, NON_ARC_GAUGE, TriState};

const FROM_TYPE: Provenance = Provenance::Derived { from: "Type" };
const FROM_ARC_RATING: Provenance = Provenance::Derived { from: "Arc Rated" };
const FROM_BUCKET: Provenance = Provenance::Derived { from: "Bucket Type" };

pub(crate) fn derive(draft: &mut Draft, mode: Mode) {
    derive_arc_rating(draft);
    derive_gauge(draft);
    derive_roto_tract(draft, mode);
    derive_reset(draft);
}

fn derive_arc_rating(draft: &mut Draft) {
    if let Some(door_type) = draft.spec.door_type.known() {
        draft.spec.arc_rated = TriState::Known(door_type.is_arc_rated());
        draft.mark(Field::ArcRated, FROM_TYPE);
    }
}

fn derive_gauge(draft: &mut Draft) {
    let Some(arc_rated) = draft.spec.arc_rated.known() else {
        // Falls back to whatever the thickness rules matched, if anything.
        return;
    };

    let gauge = if arc_rated { ARC_RATED_GAUGE } else { NON_ARC_GAUGE };
    if let Provenance::Matched { rule } = draft.provenance(Field::DoorThickness) {
        if draft.spec.door_thickness_gauge.known() != Some(gauge) {
            tracing::debug!(rule, gauge, "arc rating overrides matched gauge");
        }
    }
    draft.spec.door_thickness_gauge = TriState::Known(gauge);
    draft.mark(Field::DoorThickness, FROM_ARC_RATING);
}

fn derive_roto_tract(draft: &mut Draft, mode: Mode) {
    let field = Field::Cutout(CutoutKind::RotoTract);
    let mentioned = draft.spec.cutouts.roto_tract;

    match draft.spec.door_type.known() {
        Some(DoorType::FreedomPlus) => {
            if mentioned == TriState::Known(true) {
                tracing::debug!("rototract mention ignored for a Freedom Plus door");
            }
            draft.spec.cutouts.roto_tract = TriState::Known(false);
            draft.mark(field, FROM_TYPE);
        }
        Some(DoorType::FreedomPlusFlashGard) => match mode {
            Mode::Document => {
                draft.spec.cutouts.roto_tract = TriState::Known(true);
                draft.mark(field, FROM_TYPE);
            }
            // The mention stands (or stays unresolved) once the conversation
            // is arc rated.
            Mode::Conversation => {}
        },
        None => {
            if mentioned.is_known() {
                tracing::debug!("rototract mention ignored without a door type");
            }
            draft.spec.cutouts.roto_tract = TriState::Unknown;
            draft.mark(field, Provenance::Unknown);
        }
    }
}

fn derive_reset(draft: &mut Draft) {
    let field = Field::Cutout(CutoutKind::Reset);
    match draft.spec.bucket_type.known() {
        Some(bucket) => {
            draft.spec.cutouts.reset = TriState::Known(bucket == BucketType::DriveBucket);
            draft.mark(field, FROM_BUCKET);
        }
        None => {
            draft.spec.cutouts.reset = TriState::Unknown;
            draft.mark(field, Provenance::Unknown);
        }
    }
}
