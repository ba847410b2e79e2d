//! Provenance tracking and run metrics.
//!
//! Every field of the record carries a [`Provenance`] describing which stage
//! settled it. The traces make an extraction explainable: the CLI report
//! prints them, and tests use them to check that strict runs never invent
//! values.
//!
//! Timings are collected for every run; they are cheap (`Instant` reads at
//! stage boundaries) and only surfaced through the verbose API.

use crate::{DoorSpecification, Field};
use std::time::Duration;

/// Which stage settled a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// No stage produced a value.
    Unknown,
    /// Textual evidence, with the name of the rule that matched.
    Matched { rule: &'static str },
    /// Computed from another field.
    Derived { from: &'static str },
    /// Filled by the lenient completion policy.
    Defaulted,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Unknown => "unknown",
            Provenance::Matched { .. } => "matched",
            Provenance::Derived { .. } => "derived",
            Provenance::Defaulted => "defaulted",
        }
    }

    /// Rule name or derivation source, if any.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Provenance::Matched { rule } => Some(rule),
            Provenance::Derived { from } => Some(from),
            Provenance::Unknown | Provenance::Defaulted => None,
        }
    }
}

/// Final value of one field and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTrace {
    pub field: Field,
    /// Display form of the value (`"unknown"` when unresolved).
    pub value: String,
    pub provenance: Provenance,
}

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Extractor::run_with_metrics`](super::Extractor::run_with_metrics).
    pub total: Duration,
    /// Time spent running the field rules over the corpus.
    pub matching: Duration,
    /// Time spent in derivation, completion and assembly.
    pub resolve: Duration,
}

/// Extractor output bundled with traces and timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub spec: DoorSpecification,
    /// One trace per field, in schema order.
    pub traces: Vec<FieldTrace>,
    /// Names of the rules that were eligible for this corpus and mode.
    pub active_rules: Vec<&'static str>,
    pub metrics: RunMetrics,
}
