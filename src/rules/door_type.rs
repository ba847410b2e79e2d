use crate::engine::BucketMask;
use crate::rules::helpers::followed_by_flashgard;
use crate::{DoorType, Field, Rule};

/// `type: freedom plus flashgard` (also `door type:` / `mcc type:`).
fn rule_labelled_flashgard() -> Rule {
    rule! {
        name: "type label: freedom plus flashgard",
        field: Field::DoorType,
        pattern: re!(r"\b(?:door |mcc )?type\s*:?\s*freedom\s+plus\s+flashgard"),
        buckets: BucketMask::TYPEISH.bits(),
        prod: |_groups: &[String]| -> Option<DoorType> { Some(DoorType::FreedomPlusFlashGard) },
    }
}

/// `type: freedom plus`, rejected when "flashgard" follows.
fn rule_labelled_freedom_plus() -> Rule {
    rule! {
        name: "type label: freedom plus",
        field: Field::DoorType,
        pattern: re!(r"\b(?:door |mcc )?type\s*:?\s*freedom\s+plus(\s+flashgard)?"),
        buckets: BucketMask::TYPEISH.bits(),
        prod: |groups: &[String]| -> Option<DoorType> {
            (!followed_by_flashgard(groups)).then_some(DoorType::FreedomPlus)
        },
    }
}

fn rule_bare_flashgard() -> Rule {
    rule! {
        name: "freedom plus flashgard",
        field: Field::DoorType,
        pattern: re!(r"freedom\s+plus\s+flashgard"),
        buckets: BucketMask::TYPEISH.bits(),
        prod: |_groups: &[String]| -> Option<DoorType> { Some(DoorType::FreedomPlusFlashGard) },
    }
}

fn rule_bare_freedom_plus() -> Rule {
    rule! {
        name: "freedom plus",
        field: Field::DoorType,
        pattern: re!(r"freedom\s+plus(\s+flashgard)?"),
        buckets: BucketMask::TYPEISH.bits(),
        prod: |groups: &[String]| -> Option<DoorType> {
            (!followed_by_flashgard(groups)).then_some(DoorType::FreedomPlus)
        },
    }
}

/// Any "flashgard" mention ("we want flashgard") names the arc-rated line.
fn rule_flashgard_mention() -> Rule {
    rule! {
        name: "flashgard mention",
        field: Field::DoorType,
        pattern: phrases!("flashgard"),
        buckets: BucketMask::TYPEISH.bits(),
        prod: |_groups: &[String]| -> Option<DoorType> { Some(DoorType::FreedomPlusFlashGard) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_labelled_flashgard(),
        rule_labelled_freedom_plus(),
        rule_bare_flashgard(),
        rule_bare_freedom_plus(),
        rule_flashgard_mention(),
    ]
}
