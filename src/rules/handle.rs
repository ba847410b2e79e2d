use crate::engine::BucketMask;
use crate::{Field, HandleType, Rule};

fn rule_labelled_up_down() -> Rule {
    rule! {
        name: "handle label: up-down handle",
        field: Field::HandleType,
        pattern: re!(r"\bhandle(?:\s+type)?\s*:?\s*up[-\s]down\s*handle"),
        buckets: BucketMask::HANDLEISH.bits(),
        prod: |_groups: &[String]| -> Option<HandleType> { Some(HandleType::UpDownHandle) },
    }
}

fn rule_labelled_rotary() -> Rule {
    rule! {
        name: "handle label: rotary handle",
        field: Field::HandleType,
        pattern: re!(r"\bhandle(?:\s+type)?\s*:?\s*rotary\s*handle"),
        buckets: BucketMask::HANDLEISH.bits(),
        prod: |_groups: &[String]| -> Option<HandleType> { Some(HandleType::RotaryHandle) },
    }
}

fn rule_bare_up_down() -> Rule {
    rule! {
        name: "up-down handle",
        field: Field::HandleType,
        pattern: re!(r"up[-\s]down\s*handle"),
        buckets: BucketMask::HANDLEISH.bits(),
        prod: |_groups: &[String]| -> Option<HandleType> { Some(HandleType::UpDownHandle) },
    }
}

fn rule_bare_rotary() -> Rule {
    rule! {
        name: "rotary handle",
        field: Field::HandleType,
        pattern: re!(r"rotary\s*handle"),
        buckets: BucketMask::HANDLEISH.bits(),
        prod: |_groups: &[String]| -> Option<HandleType> { Some(HandleType::RotaryHandle) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_labelled_up_down(), rule_labelled_rotary(), rule_bare_up_down(), rule_bare_rotary()]
}
