extern crate self as doorspec;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod door;
mod engine;
mod error;
mod rules;

pub use api::{
    Extraction, ExtractionDetails, ExtractionVerbose, Mode, Options, Policy, Role, StageTimings, Transcript, Turn,
    extract_conversation, extract_document, extract_verbose_with, extract_with,
};
pub use door::{
    ARC_RATED_GAUGE, BucketType, CutoutKind, Cutouts, DoorSpecification, DoorType, Field, HandleType, NON_ARC_GAUGE,
    TriState,
};
pub use engine::{FieldTrace, Provenance};
pub use error::{Error, Result};

// --- Internal types ---------------------------------------------------------

/// Door height in inches, as produced by a height rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Inches(pub u32);

/// Door thickness gauge, as produced by a thickness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Gauge(pub u32);

/// Canonical value a rule attaches to the field it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Evidence {
    DoorType(DoorType),
    Height(u32),
    Bucket(BucketType),
    Handle(HandleType),
    /// A cutout keyword was present (or explicitly confirmed).
    Present(bool),
    Gauge(u32),
}

// Trait to convert rule production results into evidence
pub(crate) trait IntoEvidence {
    fn into_evidence(self) -> Option<Evidence>;
}

impl IntoEvidence for DoorType {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::DoorType(self))
    }
}

impl IntoEvidence for Inches {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::Height(self.0))
    }
}

impl IntoEvidence for BucketType {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::Bucket(self))
    }
}

impl IntoEvidence for HandleType {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::Handle(self))
    }
}

impl IntoEvidence for bool {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::Present(self))
    }
}

impl IntoEvidence for Gauge {
    fn into_evidence(self) -> Option<Evidence> {
        Some(Evidence::Gauge(self.0))
    }
}

// Pattern items used by rules: a Regex searched over the corpus, or a set of
// literal phrases of which any one must occur.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Match a regular expression against the lowercased corpus. The `Regex`
    /// is stored as a static reference (created via the `regex!` helper macro
    /// in `src/macros.rs`).
    Regex(&'static Regex),

    /// Match when any of the phrases occurs as a substring of the corpus.
    /// Phrases are written in lowercase.
    Phrases(&'static [&'static str]),
}

/// Production input: capture groups of one match, group 0 first. Groups that
/// did not participate in the match are empty strings. For `Pattern::Phrases`
/// the only group is the phrase that was found.
pub(crate) type Production = Box<dyn Fn(&[String]) -> Option<Evidence> + Send + Sync>;

/// An extraction rule: a name, the field it feeds, a single `pattern` and a
/// `production` turning a match into evidence. A production returning `None`
/// rejects that match; the matcher then tries the next occurrence and
/// finally the next rule.
pub(crate) struct Rule {
    pub name: &'static str,
    pub field: Field,
    pub pattern: Pattern,
    pub production: Production,
    /// Modes the rule applies to (`ModeMask` bits, 0 = every mode).
    pub modes: u8,
    /// Bucket mask - rule only activates if the corpus has matching buckets.
    pub buckets: u32,
    /// Scan occurrences from the end of a conversation corpus, so later turns
    /// override earlier ones.
    pub latest_wins: bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .field("modes", &self.modes)
            .field("buckets", &self.buckets)
            .finish()
    }
}
