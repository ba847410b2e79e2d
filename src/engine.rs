//! Extraction engine.
//!
//! The engine turns a normalized corpus into a
//! [`DoorSpecification`](crate::DoorSpecification). It is
//! split into focused submodules under `src/engine/`:
//!
//! ```text
//! rules (all) ──┐
//!               │  CompiledRules::new            (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! sources ── normalize ─────────┤                (normalize.rs)
//!                               │
//! corpus ── TriggerInfo::scan ──┼─ select active rules (mode + buckets)
//!          (trigger.rs)         │
//!                               v
//!                     Matcher::run               (matcher.rs)
//!                       - per field, rules in priority order
//!                       - first rule yielding evidence wins
//!                               │
//!                               v
//!                     derive                     (derive.rs)
//!                       - Type → ArcRated → gauge, Type → RotoTract
//!                       - BucketType → Reset
//!                               │
//!                               v
//!                     complete (strict | lenient) (complete.rs)
//!                               │
//!                               v
//!                     assemble → DoorSpecification + FieldTrace list
//! ```
//!
//! `extractor.rs` wires the stages together; `draft.rs` holds the record under
//! construction with per-field provenance; `trace.rs` defines provenance and
//! timing types.
//!
//! ## Adding rules / fields
//!
//! - New rules go under `src/rules/**`; their position in the table is their
//!   priority within the field.
//! - A rule that can only match when some coarse corpus feature is present
//!   should declare that `BucketMask` bit so it is skipped otherwise.
//! - A new derived field gets a function in `derive.rs`; keep `derive`
//!   idempotent.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events (trigger scan, rule hits, rejected
//! occurrences, overrides, defaults). The CLI prints them when `DOORSPEC_LOG`
//! is set, e.g. `DOORSPEC_LOG=doorspec=trace`.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/complete.rs"]
mod complete;
#[path = "engine/derive.rs"]
mod derive;
#[path = "engine/draft.rs"]
mod draft;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/trace.rs"]
mod trace;
#[path = "engine/trigger.rs"]
mod trigger;

#[allow(unused_imports)]
pub use compiled_rules::{BucketMask, CompiledRules, ModeMask, RuleMeta};
pub use extractor::Extractor;
pub(crate) use normalize::normalize;
#[allow(unused_imports)]
pub use trace::{FieldTrace, Provenance, RunMetrics, RunResult};
