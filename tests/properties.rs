use doorspec::{DoorType, Mode, Options, Policy, TriState, extract_with};
use proptest::prelude::*;

const FRAGMENTS: &[&str] = &[
    "freedom plus",
    "Freedom Plus FlashGard",
    "type: freedom plus",
    "Door Type: Freedom Plus FlashGard",
    "flashgard",
    "rototract cutout",
    "with rototract",
    "rototract: yes",
    "drive bucket",
    "starter bucket",
    "vfd",
    "up-down handle",
    "rotary handle",
    "fan cutout",
    "with pemstud",
    "device panel",
    "pushbutton",
    "height: 40 inches",
    "44 inches",
    "0 inches",
    "thickness: 12 ga",
    "14 gauge door",
    "actually",
    "no,",
];

fn corpus() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8).prop_map(|parts| parts.join(" "))
}

fn options() -> impl Strategy<Value = Options> {
    (
        prop_oneof![Just(Mode::Document), Just(Mode::Conversation)],
        prop_oneof![Just(Policy::Strict), Just(Policy::Lenient)],
    )
        .prop_map(|(mode, policy)| Options { mode, policy })
}

proptest! {
    #[test]
    fn prop_door_type_fixes_arc_rating_and_gauge(text in corpus(), opts in options()) {
        let spec = extract_with([text.as_str()], &opts).spec;
        match spec.door_type {
            TriState::Known(DoorType::FreedomPlusFlashGard) => {
                prop_assert_eq!(spec.arc_rated, TriState::Known(true));
                prop_assert_eq!(spec.door_thickness_gauge, TriState::Known(12));
            }
            TriState::Known(DoorType::FreedomPlus) => {
                prop_assert_eq!(spec.arc_rated, TriState::Known(false));
                prop_assert_eq!(spec.door_thickness_gauge, TriState::Known(14));
            }
            TriState::Unknown => prop_assert_eq!(spec.arc_rated, TriState::Unknown),
        }
    }

    #[test]
    fn prop_rototract_requires_flashgard(text in corpus(), opts in options()) {
        let spec = extract_with([text.as_str()], &opts).spec;
        if spec.cutouts.roto_tract == TriState::Known(true) {
            prop_assert_eq!(spec.door_type, TriState::Known(DoorType::FreedomPlusFlashGard));
        }
    }

    #[test]
    fn prop_lenient_is_complete_and_deterministic(text in corpus(), mode in prop_oneof![Just(Mode::Document), Just(Mode::Conversation)]) {
        let opts = Options { mode, policy: Policy::Lenient };
        let first = extract_with([text.as_str()], &opts).spec;
        let second = extract_with([text.as_str()], &opts).spec;
        prop_assert!(first.is_complete());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_engine_output_has_no_violations(text in corpus(), opts in options()) {
        let spec = extract_with([text.as_str()], &opts).spec;
        prop_assert!(spec.violations().is_empty(), "{:?}", spec.violations());
    }

    #[test]
    fn prop_strict_height_comes_from_text(text in corpus(), mode in prop_oneof![Just(Mode::Document), Just(Mode::Conversation)]) {
        let opts = Options { mode, policy: Policy::Strict };
        let spec = extract_with([text.as_str()], &opts).spec;
        if let TriState::Known(height) = spec.door_height_inches {
            prop_assert!(text.contains(&height.to_string()));
        }
    }
}
