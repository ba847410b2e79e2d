//! Door height rules.
//!
//! Every height rule scans occurrences from the end in conversation mode, so
//! "40 inches ... actually 44 inches" settles on 44, while a document keeps
//! its first statement. Captures that do not parse as a positive `u32` are
//! rejected and the scan moves on.

use crate::engine::BucketMask;
use crate::rules::helpers::{group, parse_positive};
use crate::{Field, Inches, Rule};

fn inches(groups: &[String]) -> Option<Inches> {
    group(groups, 1).and_then(parse_positive).map(Inches)
}

/// `door height: 40 inches`, `height 40"`, `height: 40 in`.
fn rule_labelled_with_unit() -> Rule {
    rule! {
        name: "height label + number + unit",
        field: Field::DoorHeight,
        pattern: re!(r#"(?:door\s+height|height)\s*:?\s*(\d+)\s*(?:inch|inches|in|")"#),
        buckets: BucketMask::HAS_DIGITS.bits(),
        latest_wins: true,
        prod: |groups: &[String]| -> Option<Inches> { inches(groups) },
    }
}

/// `height: 40`.
fn rule_labelled_number() -> Rule {
    rule! {
        name: "height label + number",
        field: Field::DoorHeight,
        pattern: re!(r"(?:door\s+height|height)\s*:?\s*(\d+)"),
        buckets: BucketMask::HAS_DIGITS.bits(),
        latest_wins: true,
        prod: |groups: &[String]| -> Option<Inches> { inches(groups) },
    }
}

/// Any `40 inch` / `40 inches` in the text.
fn rule_number_inches() -> Rule {
    rule! {
        name: "number + inches",
        field: Field::DoorHeight,
        pattern: re!(r"(\d+)\s*inch(?:es)?"),
        buckets: BucketMask::HAS_DIGITS.bits(),
        latest_wins: true,
        prod: |groups: &[String]| -> Option<Inches> { inches(groups) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_labelled_with_unit(), rule_labelled_number(), rule_number_inches()]
}
