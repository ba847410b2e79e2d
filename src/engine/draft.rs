//! The record under construction.
//!
//! A `Draft` pairs the partially filled [`DoorSpecification`] with one
//! [`Provenance`] slot per field. The matcher fills it with textual evidence,
//! derivations may override or clear fields, the completion policy fills the
//! gaps and the assembler turns it into the finished record.

use super::trace::{FieldTrace, Provenance};
use crate::{DoorSpecification, Evidence, Field, TriState};

#[derive(Debug, Clone)]
pub(crate) struct Draft {
    pub spec: DoorSpecification,
    provenance: [Provenance; Field::COUNT],
}

impl Draft {
    pub fn new() -> Self {
        Draft { spec: DoorSpecification::unknown(), provenance: [Provenance::Unknown; Field::COUNT] }
    }

    pub fn provenance(&self, field: Field) -> Provenance {
        self.provenance[field.index()]
    }

    pub fn mark(&mut self, field: Field, provenance: Provenance) {
        self.provenance[field.index()] = provenance;
    }

    /// Store matcher evidence for `field`. Returns false (and stores nothing)
    /// when the evidence kind does not belong to the field.
    pub fn record_match(&mut self, field: Field, evidence: Evidence, rule: &'static str) -> bool {
        let spec = &mut self.spec;
        match (field, evidence) {
            (Field::DoorType, Evidence::DoorType(t)) => spec.door_type = TriState::Known(t),
            (Field::DoorHeight, Evidence::Height(h)) => spec.door_height_inches = TriState::Known(h),
            (Field::BucketType, Evidence::Bucket(b)) => spec.bucket_type = TriState::Known(b),
            (Field::HandleType, Evidence::Handle(h)) => spec.handle_type = TriState::Known(h),
            (Field::Cutout(kind), Evidence::Present(p)) => spec.cutouts.set(kind, TriState::Known(p)),
            (Field::DoorThickness, Evidence::Gauge(g)) => spec.door_thickness_gauge = TriState::Known(g),
            (field, evidence) => {
                tracing::warn!(rule, %field, ?evidence, "rule produced evidence for the wrong field");
                return false;
            }
        }
        self.mark(field, Provenance::Matched { rule });
        true
    }

    /// Per-field traces in schema order.
    pub fn traces(&self) -> Vec<FieldTrace> {
        Field::ALL
            .iter()
            .map(|&field| FieldTrace {
                field,
                value: self.spec.value_label(field),
                provenance: self.provenance(field),
            })
            .collect()
    }
}
