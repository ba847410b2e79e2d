//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the structures derived
//! from the rule table that make an extraction run cheap and predictable.
//!
//! Extraction is split into two phases:
//!
//! 1. **Compile/index rules** (this module): group the rule table per field,
//!    keeping each field's priority order, and decode per-rule metadata.
//! 2. **Run** (see `extractor.rs`): scan the corpus for coarse triggers
//!    (`trigger.rs`), select the active rules for the current mode, then match,
//!    derive, complete and assemble.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` and `CompiledRules::metas`.
//!   Those vectors must stay aligned.
//! - `RuleIndex::by_field[f]` lists rule ids in table order. Table order *is*
//!   priority order: the first rule of a field that produces evidence wins.

use crate::{Field, Rule};

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse corpus features used to skip rules that cannot match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const TYPEISH    = 1 << 1;
        const BUCKETISH  = 1 << 2;
        const HANDLEISH  = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Extraction modes a rule participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeMask: u8 {
        const DOCUMENT     = 1 << 0;
        const CONVERSATION = 1 << 1;
    }
}

impl crate::Mode {
    pub(crate) fn mask(self) -> ModeMask {
        match self {
            crate::Mode::Document => ModeMask::DOCUMENT,
            crate::Mode::Conversation => ModeMask::CONVERSATION,
        }
    }
}

/// Metadata decoded from a rule's raw bit fields.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub field: Field,
    pub modes: ModeMask,
    pub buckets: BucketMask,
    pub latest_wins: bool,
}

#[derive(Default, Debug)]
pub struct RuleIndex {
    pub by_field: [Vec<RuleId>; Field::COUNT],
}

/// Pre-compiled rule table with metadata and indexes.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
    pub index: RuleIndex,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from a slice of rules.
    ///
    /// A rule declaring no modes applies to every mode.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| {
                let modes = ModeMask::from_bits_truncate(r.modes);
                RuleMeta {
                    field: r.field,
                    modes: if modes.is_empty() { ModeMask::all() } else { modes },
                    buckets: BucketMask::from_bits_truncate(r.buckets),
                    latest_wins: r.latest_wins,
                }
            })
            .collect();

        let mut index = RuleIndex::default();
        for (id, meta) in metas.iter().enumerate() {
            index.by_field[meta.field.index()].push(id);
        }

        CompiledRules { rules: rule_refs, metas, index }
    }

    /// Rule ids for `field`, in priority order.
    pub fn for_field(&self, field: Field) -> &[RuleId] {
        &self.index.by_field[field.index()]
    }
}
