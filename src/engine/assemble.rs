//! Record assembly.
//!
//! Turns the finished draft into the caller-visible record plus its traces.
//! Shape rules:
//!
//! - every top-level field is always present (unknown serializes as `null`);
//! - lenient records carry all five cutouts;
//! - strict records carry only the cutouts the extraction populated (unknown
//!   cutouts are omitted on serialization).
//!
//! Assembly cannot fail. Shape or invariant problems can only come from a
//! broken rule table, so they are logged rather than surfaced.

use super::draft::Draft;
use super::trace::FieldTrace;
use crate::{DoorSpecification, Policy};

pub(crate) fn assemble(draft: Draft, policy: Policy) -> (DoorSpecification, Vec<FieldTrace>) {
    let spec = draft.spec;

    if policy == Policy::Lenient && !spec.is_complete() {
        tracing::warn!(?spec, "lenient record left fields unresolved");
    }
    for violation in spec.violations() {
        tracing::warn!(violation, "assembled record breaks an invariant");
    }

    (spec, draft.traces())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trace::Provenance;
    use crate::{Evidence, Field, HandleType};

    #[test]
    fn traces_cover_every_field_in_schema_order() {
        let mut draft = Draft::new();
        draft.record_match(Field::HandleType, Evidence::Handle(HandleType::RotaryHandle), "bare rotary handle");
        let (spec, traces) = assemble(draft, Policy::Strict);

        assert_eq!(spec.handle_type.known(), Some(HandleType::RotaryHandle));
        let fields: Vec<Field> = traces.iter().map(|t| t.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());

        let handle = &traces[Field::HandleType.index()];
        assert_eq!(handle.value, "Rotary Handle");
        assert_eq!(handle.provenance, Provenance::Matched { rule: "bare rotary handle" });
        assert_eq!(traces[0].value, "unknown");
    }
}
