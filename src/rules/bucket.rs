use crate::engine::BucketMask;
use crate::{BucketType, Field, Rule};

fn rule_labelled_drive() -> Rule {
    rule! {
        name: "bucket label: drive bucket",
        field: Field::BucketType,
        pattern: re!(r"\bbucket(?:\s+type)?\s*:?\s*drive\s*bucket"),
        buckets: BucketMask::BUCKETISH.bits(),
        prod: |_groups: &[String]| -> Option<BucketType> { Some(BucketType::DriveBucket) },
    }
}

fn rule_labelled_starter() -> Rule {
    rule! {
        name: "bucket label: starter bucket",
        field: Field::BucketType,
        pattern: re!(r"\bbucket(?:\s+type)?\s*:?\s*starter\s*bucket"),
        buckets: BucketMask::BUCKETISH.bits(),
        prod: |_groups: &[String]| -> Option<BucketType> { Some(BucketType::StarterBucket) },
    }
}

// Drive before starter: a text naming both is a drive bucket.
fn rule_bare_drive() -> Rule {
    rule! {
        name: "drive bucket",
        field: Field::BucketType,
        pattern: re!(r"drive\s*bucket"),
        buckets: BucketMask::BUCKETISH.bits(),
        prod: |_groups: &[String]| -> Option<BucketType> { Some(BucketType::DriveBucket) },
    }
}

fn rule_bare_starter() -> Rule {
    rule! {
        name: "starter bucket",
        field: Field::BucketType,
        pattern: re!(r"starter\s*bucket"),
        buckets: BucketMask::BUCKETISH.bits(),
        prod: |_groups: &[String]| -> Option<BucketType> { Some(BucketType::StarterBucket) },
    }
}

/// Variable frequency drives are housed in drive buckets.
fn rule_vfd() -> Rule {
    rule! {
        name: "vfd / variable frequency",
        field: Field::BucketType,
        pattern: re!(r"\b(?:vfds?|variable\s+frequency)\b"),
        buckets: BucketMask::BUCKETISH.bits(),
        prod: |_groups: &[String]| -> Option<BucketType> { Some(BucketType::DriveBucket) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_labelled_drive(), rule_labelled_starter(), rule_bare_drive(), rule_bare_starter(), rule_vfd()]
}
