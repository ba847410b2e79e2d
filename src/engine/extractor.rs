//! Extraction run orchestration.
//!
//! ```text
//! corpus ── Matcher::run ──▶ Draft (matched fields, rest unresolved)
//!                               │
//!                          derive(mode)        structural fields, may override
//!                               │
//!                         complete(policy)     strict: nothing / lenient: defaults
//!                               │
//!                           assemble           DoorSpecification + traces
//! ```
//!
//! An `Extractor` is built per call and holds no state beyond the run; the
//! compiled rule table it borrows is immutable and shared.

use super::assemble::assemble;
use super::compiled_rules::CompiledRules;
use super::complete::complete;
use super::derive::derive;
use super::draft::Draft;
use super::matcher::Matcher;
use super::trace::{RunMetrics, RunResult};
use crate::Options;
use std::time::Instant;

pub struct Extractor<'a> {
    matcher: Matcher<'a>,
    options: Options,
}

impl<'a> Extractor<'a> {
    /// Create an extractor for a normalized `corpus`.
    pub fn new(corpus: &'a str, compiled: &'a CompiledRules<'a>, options: &Options) -> Self {
        Extractor { matcher: Matcher::new(corpus, compiled, options.mode), options: *options }
    }

    /// Run every stage and return the record with traces and timing details.
    pub fn run_with_metrics(self) -> RunResult {
        let total_start = Instant::now();
        let Options { mode, policy } = self.options;

        let mut draft = Draft::new();
        self.matcher.run(&mut draft);
        let matching = total_start.elapsed();

        let resolve_start = Instant::now();
        derive(&mut draft, mode);
        complete(&mut draft, policy, mode);
        let (spec, traces) = assemble(draft, policy);
        let resolve = resolve_start.elapsed();

        RunResult {
            spec,
            traces,
            active_rules: self.matcher.active_rule_names(),
            metrics: RunMetrics { total: total_start.elapsed(), matching, resolve },
        }
    }
}
