//! Trigger scanning (corpus pre-classification).
//!
//! Inspects the normalized corpus once and produces coarse bucket flags that
//! let the extractor skip rules whose patterns cannot possibly match.
//!
//! ## Design notes
//!
//! - A bucket must only be *required* by a rule when its absence makes the
//!   rule's pattern unmatchable; gating is never allowed to change results.
//! - The corpus is already lowercased by the normalizer, so the scan uses
//!   plain substring checks.

use super::compiled_rules::BucketMask;

/// Corpus characteristics detected before matching.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan a normalized (lowercased) `corpus` for coarse buckets.
    pub fn scan(corpus: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if corpus.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if corpus.contains("freedom") || corpus.contains("flashgard") {
            buckets |= BucketMask::TYPEISH;
        }

        const BUCKET_CUES: &[&str] = &["bucket", "vfd", "variable"];
        if BUCKET_CUES.iter().any(|cue| corpus.contains(cue)) {
            buckets |= BucketMask::BUCKETISH;
        }

        if corpus.contains("handle") {
            buckets |= BucketMask::HANDLEISH;
        }

        TriggerInfo { buckets }
    }

    /// True when every bucket in `required` was detected.
    pub fn satisfies(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_corpus_has_no_buckets() {
        assert!(TriggerInfo::scan("").buckets.is_empty());
    }

    #[test]
    fn detects_each_bucket() {
        let info = TriggerInfo::scan("freedom plus, 40 inch, drive bucket, rotary handle");
        assert_eq!(info.buckets, BucketMask::all());
        assert!(info.satisfies(BucketMask::HAS_DIGITS | BucketMask::HANDLEISH));
    }

    #[test]
    fn vfd_counts_as_bucket_cue() {
        let info = TriggerInfo::scan("feeds a vfd");
        assert!(info.satisfies(BucketMask::BUCKETISH));
        assert!(!info.satisfies(BucketMask::TYPEISH));
        assert!(info.satisfies(BucketMask::empty()));
    }
}
