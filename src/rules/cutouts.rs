//! Cutout keyword rules.
//!
//! Each cutout is an independent presence test: any listed keyword marks the
//! cutout as requested. Absence is not evidence, so nothing here ever
//! produces `false`. `Reset` has no rules; it follows the bucket type.

use crate::engine::ModeMask;
use crate::{CutoutKind, Field, Rule};

const ROTO_TRACT: Field = Field::Cutout(CutoutKind::RotoTract);
const FAN: Field = Field::Cutout(CutoutKind::Fan);
const PEMSTUD: Field = Field::Cutout(CutoutKind::Pemstud);
const DEVICE_PANEL: Field = Field::Cutout(CutoutKind::DevicePanel);

fn rule_roto_tract_phrases() -> Rule {
    rule! {
        name: "rototract cutout",
        field: ROTO_TRACT,
        pattern: phrases!("rototract cutout", "roto tract cutout", "with rototract"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

fn rule_roto_tract_confirmed() -> Rule {
    rule! {
        name: "rototract: yes",
        field: ROTO_TRACT,
        pattern: re!(r"rototract\s*:\s*(?:yes|true)"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

/// Chat summaries treat any mention as a request.
fn rule_roto_tract_mention() -> Rule {
    rule! {
        name: "rototract mention",
        field: ROTO_TRACT,
        pattern: phrases!("rototract", "roto tract"),
        modes: ModeMask::CONVERSATION.bits(),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

fn rule_fan_phrases() -> Rule {
    rule! {
        name: "fan cutout",
        field: FAN,
        pattern: phrases!("fan cutout", "with fan", "needs fan"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

fn rule_fan_confirmed() -> Rule {
    rule! {
        name: "fan: yes",
        field: FAN,
        pattern: re!(r"\bfan\s*:\s*(?:yes|true)"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

fn rule_cooling_fan() -> Rule {
    rule! {
        name: "cooling fan",
        field: FAN,
        pattern: phrases!("cooling fan"),
        modes: ModeMask::DOCUMENT.bits(),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

// "pemstud: yes" and "with pemstud" are covered by the bare keyword.
fn rule_pemstud() -> Rule {
    rule! {
        name: "pemstud",
        field: PEMSTUD,
        pattern: phrases!("pemstud", "pem stud"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

fn rule_device_panel_cutout() -> Rule {
    rule! {
        name: "device panel cutout",
        field: DEVICE_PANEL,
        pattern: phrases!("device panel cutout"),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

/// Documents describe the panel by its contents as often as by name.
fn rule_device_panel_document() -> Rule {
    rule! {
        name: "device panel keywords",
        field: DEVICE_PANEL,
        pattern: phrases!("device panel", "control panel", "pushbutton", "pilot device"),
        modes: ModeMask::DOCUMENT.bits(),
        prod: |_groups: &[String]| -> Option<bool> { Some(true) },
    }
}

pub fn get() -> Vec<Rule> {
    vec![
        rule_roto_tract_phrases(),
        rule_roto_tract_confirmed(),
        rule_roto_tract_mention(),
        rule_fan_phrases(),
        rule_fan_confirmed(),
        rule_cooling_fan(),
        rule_pemstud(),
        rule_device_panel_cutout(),
        rule_device_panel_document(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_has_no_keyword_rules() {
        assert!(get().iter().all(|r| r.field != Field::Cutout(CutoutKind::Reset)));
    }

    #[test]
    fn every_other_cutout_has_a_rule_for_both_modes() {
        let rules = get();
        for kind in [CutoutKind::RotoTract, CutoutKind::Fan, CutoutKind::Pemstud, CutoutKind::DevicePanel] {
            assert!(rules.iter().any(|r| r.field == Field::Cutout(kind) && r.modes == 0), "{kind:?}");
        }
    }
}
