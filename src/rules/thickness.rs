//! Direct gauge cues. These only matter while the arc rating is unresolved;
//! once it is known the gauge is derived from it.

use crate::engine::BucketMask;
use crate::rules::helpers::{group, parse_positive};
use crate::{ARC_RATED_GAUGE, Field, Gauge, NON_ARC_GAUGE, Rule};

fn gauge(groups: &[String]) -> Option<Gauge> {
    group(groups, 1)
        .and_then(parse_positive)
        .filter(|g| *g == ARC_RATED_GAUGE || *g == NON_ARC_GAUGE)
        .map(Gauge)
}

/// `thickness: 14 ga`, `door thickness 12 gauge`.
fn rule_labelled_gauge() -> Rule {
    rule! {
        name: "thickness label + number + ga",
        field: Field::DoorThickness,
        pattern: re!(r"(?:door\s+thickness|thickness)\s*:?\s*(\d+)\s*(?:ga|gauge)\b"),
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |groups: &[String]| -> Option<Gauge> { gauge(groups) },
    }
}

/// `12 ga door`, `14 gauge thickness`.
fn rule_gauge_door() -> Rule {
    rule! {
        name: "number + ga + door",
        field: Field::DoorThickness,
        pattern: re!(r"(\d+)\s*(?:ga|gauge)\s*(?:door|thickness)"),
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |groups: &[String]| -> Option<Gauge> { gauge(groups) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_labelled_gauge(), rule_gauge_door()]
}
