//! Field matching.
//!
//! For every field the matcher walks the field's rules in priority order and
//! stops at the first rule that yields evidence:
//!
//! ```text
//! rules(field) ── gated by mode + buckets ──▶ [r0, r1, r2, ...]
//!                                               │
//!      occurrences(r0.pattern) in corpus order  │  (reversed when the rule is
//!      ── production(groups) ── Some ──▶ hit    │   `latest_wins` and the run
//!                            └─ None ──▶ next occurrence, then next rule
//! ```
//!
//! Fields are independent: a hit on one field never affects another. Rejected
//! occurrences are how numeric rules recover from unparseable captures and how
//! "freedom plus" rules skip occurrences followed by "flashgard".

use super::compiled_rules::{CompiledRules, RuleId};
use super::draft::Draft;
use super::trigger::TriggerInfo;
use crate::{Evidence, Field, Mode, Pattern, Rule};

/// A rule that produced evidence for its field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hit {
    pub rule: &'static str,
    pub evidence: Evidence,
}

pub(crate) struct Matcher<'a> {
    corpus: &'a str,
    mode: Mode,
    compiled: &'a CompiledRules<'a>,
    /// Per rule id: eligible for this corpus and mode.
    active: Vec<bool>,
}

impl<'a> Matcher<'a> {
    pub fn new(corpus: &'a str, compiled: &'a CompiledRules<'a>, mode: Mode) -> Self {
        let trigger_info = TriggerInfo::scan(corpus);
        tracing::debug!(buckets = ?trigger_info.buckets, corpus_len = corpus.len(), "trigger scan");

        let active: Vec<bool> = compiled
            .metas
            .iter()
            .map(|meta| meta.modes.contains(mode.mask()) && trigger_info.satisfies(meta.buckets))
            .collect();

        tracing::debug!(
            active = active.iter().filter(|a| **a).count(),
            total = compiled.rules.len(),
            %mode,
            "rules gated"
        );

        Matcher { corpus, mode, compiled, active }
    }

    pub fn active_rule_names(&self) -> Vec<&'static str> {
        self.compiled.rules.iter().zip(&self.active).filter(|(_, on)| **on).map(|(r, _)| r.name).collect()
    }

    /// Match every field and record the hits in `draft`.
    pub fn run(&self, draft: &mut Draft) {
        for field in Field::ALL {
            if let Some(hit) = self.match_field(field) {
                draft.record_match(field, hit.evidence, hit.rule);
            }
        }
    }

    /// First rule of `field` (in priority order) that yields evidence.
    pub fn match_field(&self, field: Field) -> Option<Hit> {
        for &id in self.compiled.for_field(field) {
            if !self.active[id] {
                continue;
            }
            if let Some(evidence) = self.apply_rule(id) {
                let rule = self.compiled.rules[id];
                tracing::debug!(%field, rule = rule.name, ?evidence, "rule matched");
                return Some(Hit { rule: rule.name, evidence });
            }
        }
        tracing::trace!(%field, "unresolved");
        None
    }

    fn apply_rule(&self, id: RuleId) -> Option<Evidence> {
        let rule: &Rule = self.compiled.rules[id];
        let latest = self.compiled.metas[id].latest_wins && self.mode == Mode::Conversation;

        let mut occurrences = self.occurrences(&rule.pattern);
        if latest {
            occurrences.reverse();
        }

        for groups in occurrences {
            match (rule.production)(&groups) {
                Some(evidence) => return Some(evidence),
                None => tracing::trace!(rule = rule.name, matched = %groups[0], "occurrence rejected"),
            }
        }
        None
    }

    /// Every occurrence of `pat` in the corpus, in corpus order, as capture
    /// groups (group 0 first, missing groups as empty strings).
    fn occurrences(&self, pat: &Pattern) -> Vec<Vec<String>> {
        match pat {
            Pattern::Regex(re) => re
                .captures_iter(self.corpus)
                .map(|caps| {
                    (0..caps.len())
                        .map(|i| caps.get(i).map_or(String::new(), |g| g.as_str().to_string()))
                        .collect::<Vec<String>>()
                })
                .collect(),
            Pattern::Phrases(phrases) => {
                let mut found: Vec<(usize, &str)> = phrases
                    .iter()
                    .flat_map(|&phrase| self.corpus.match_indices(phrase))
                    .collect();
                found.sort_by_key(|(pos, phrase)| (*pos, std::cmp::Reverse(phrase.len())));
                found.into_iter().map(|(_, phrase)| vec![phrase.to_string()]).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compiled_rules::BucketMask;
    use crate::{DoorType, Inches};
    use proptest::prelude::*;

    const FRAGMENTS: &[&str] = &[
        "freedom plus",
        "Freedom Plus FlashGard",
        "type: freedom plus",
        "flashgard",
        "with rototract",
        "drive bucket",
        "starter bucket",
        "VFD",
        "up-down handle",
        "Handle: Rotary Handle",
        "fan cutout",
        "cooling fan",
        "pem stud",
        "pushbutton",
        "height: 40 inches",
        "44 inches",
        "height: ٤٠ inches",
        "٣٦ inch",
        "thickness: 12 ga",
        "14 gauge door",
        "then",
    ];

    /// The same matcher with only mode gating applied.
    fn without_bucket_gating<'a>(corpus: &'a str, compiled: &'a CompiledRules<'a>, mode: Mode) -> Matcher<'a> {
        let mut matcher = Matcher::new(corpus, compiled, mode);
        matcher.active = compiled.metas.iter().map(|meta| meta.modes.contains(mode.mask())).collect();
        matcher
    }

    fn hits(matcher: &Matcher<'_>) -> Vec<Option<(&'static str, Evidence)>> {
        Field::ALL.iter().map(|&field| matcher.match_field(field).map(|hit| (hit.rule, hit.evidence))).collect()
    }

    fn rules() -> Vec<Rule> {
        vec![
            rule! {
                name: "number inches",
                field: Field::DoorHeight,
                pattern: re!(r"(\d+)\s*inch"),
                buckets: BucketMask::HAS_DIGITS.bits(),
                latest_wins: true,
                prod: |groups: &[String]| -> Option<Inches> { groups[1].parse::<u32>().ok().filter(|v| *v > 0).map(Inches) },
            },
            rule! {
                name: "freedom plus only",
                field: Field::DoorType,
                pattern: re!(r"freedom\s+plus(\s+flashgard)?"),
                prod: |groups: &[String]| -> Option<DoorType> { groups[1].is_empty().then_some(DoorType::FreedomPlus) },
            },
        ]
    }

    #[test]
    fn document_mode_takes_first_occurrence() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        let matcher = Matcher::new("40 inches or 44 inches", &compiled, Mode::Document);
        let hit = matcher.match_field(Field::DoorHeight).unwrap();
        assert_eq!(hit.evidence, Evidence::Height(40));
        assert_eq!(hit.rule, "number inches");
    }

    #[test]
    fn conversation_mode_takes_latest_occurrence() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        let matcher = Matcher::new("40 inches or 44 inches", &compiled, Mode::Conversation);
        assert_eq!(matcher.match_field(Field::DoorHeight).unwrap().evidence, Evidence::Height(44));
    }

    #[test]
    fn unparseable_capture_falls_through_to_next_occurrence() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        let matcher = Matcher::new("99999999999 inches, then 40 inches", &compiled, Mode::Document);
        assert_eq!(matcher.match_field(Field::DoorHeight).unwrap().evidence, Evidence::Height(40));
    }

    #[test]
    fn rejected_occurrence_is_skipped() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        let matcher = Matcher::new("freedom plus flashgard vs freedom plus", &compiled, Mode::Document);
        assert_eq!(matcher.match_field(Field::DoorType).unwrap().evidence, Evidence::DoorType(DoorType::FreedomPlus));

        let matcher = Matcher::new("freedom plus flashgard", &compiled, Mode::Document);
        assert!(matcher.match_field(Field::DoorType).is_none());
    }

    #[test]
    fn bucket_gating_deactivates_rules() {
        let rules = rules();
        let compiled = CompiledRules::new(&rules);
        let matcher = Matcher::new("no numbers here", &compiled, Mode::Document);
        assert_eq!(matcher.active_rule_names(), vec!["freedom plus only"]);
        assert!(matcher.match_field(Field::DoorHeight).is_none());
    }

    #[test]
    fn non_ascii_digits_fall_through_with_or_without_gating() {
        let rules = crate::rules::get();
        let compiled = CompiledRules::new(&rules);
        let cases = [(None, "height: ٤٠ inches"), (Some(Evidence::Height(36)), "height: ٤٠ inches, then 36 inches")];

        for (expected, corpus) in cases {
            for mode in [Mode::Document, Mode::Conversation] {
                let gated = Matcher::new(corpus, &compiled, mode);
                assert_eq!(gated.match_field(Field::DoorHeight).map(|hit| hit.evidence), expected, "{corpus:?} ({mode})");
                assert_eq!(hits(&gated), hits(&without_bucket_gating(corpus, &compiled, mode)), "{corpus:?} ({mode})");
            }
        }
    }

    proptest! {
        #[test]
        fn bucket_gating_never_changes_hits(
            parts in prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8),
            mode in prop_oneof![Just(Mode::Document), Just(Mode::Conversation)],
        ) {
            let rules = crate::rules::get();
            let compiled = CompiledRules::new(&rules);
            let corpus = crate::engine::normalize(parts);

            let gated = Matcher::new(&corpus, &compiled, mode);
            prop_assert_eq!(hits(&gated), hits(&without_bucket_gating(&corpus, &compiled, mode)));
        }
    }
}
