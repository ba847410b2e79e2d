use crate::engine::{CompiledRules, Extractor};
use crate::rules;
use crate::{BucketType, DoorSpecification, DoorType, HandleType, Mode, Options, Policy, TriState};

const DOCUMENT: Options = Options { mode: Mode::Document, policy: Policy::Strict };
const CONVERSATION: Options = Options { mode: Mode::Conversation, policy: Policy::Strict };

fn extract(input: &str, options: &Options) -> DoorSpecification {
    let rules = rules::get();
    let compiled = CompiledRules::new(&rules);
    let corpus = crate::engine::normalize([input]);
    Extractor::new(&corpus, &compiled, options).run_with_metrics().spec
}

#[test]
fn door_type_examples_matching() {
    // Array of (expected, input)
    let cases: Vec<(TriState<DoorType>, &str)> = vec![
        (TriState::Known(DoorType::FreedomPlusFlashGard), "Door type: Freedom Plus FlashGard"),
        (TriState::Known(DoorType::FreedomPlusFlashGard), "MCC TYPE freedom plus flashgard"),
        (TriState::Known(DoorType::FreedomPlus), "MCC Type: Freedom Plus"),
        (TriState::Known(DoorType::FreedomPlus), "Type: Freedom Plus. See the freedom plus flashgard brochure"),
        (TriState::Known(DoorType::FreedomPlusFlashGard), "a freedom plus flashgard door"),
        (TriState::Known(DoorType::FreedomPlusFlashGard), "freedom plus flashgard, not a plain freedom plus"),
        (TriState::Known(DoorType::FreedomPlus), "we need a Freedom   Plus section"),
        (TriState::Known(DoorType::FreedomPlusFlashGard), "FlashGard please"),
        (TriState::Unknown, "freedom section"),
        (TriState::Unknown, ""),
    ];

    for (expected, input) in cases {
        for options in [DOCUMENT, CONVERSATION] {
            let spec = extract(input, &options);
            assert_eq!(spec.door_type, expected, "input: {input:?} ({})", options.mode);
        }
    }
}

#[test]
fn door_height_examples_matching() {
    // Array of (document, conversation, input)
    let cases: Vec<(TriState<u32>, TriState<u32>, &str)> = vec![
        (TriState::Known(40), TriState::Known(44), "I need 40 inches... actually make it 44 inches"),
        (TriState::Known(40), TriState::Known(40), "Door Height: 40 inches, alternate reference 44 inches"),
        (TriState::Known(72), TriState::Known(72), r#"height 72""#),
        (TriState::Known(36), TriState::Known(36), "height: 36"),
        (TriState::Known(60), TriState::Known(60), "60 inch door"),
        (TriState::Known(36), TriState::Known(36), "height: 0 inches, then 36 inches"),
        (TriState::Unknown, TriState::Unknown, "height: 99999999999 inches"),
        (TriState::Unknown, TriState::Unknown, "a tall door"),
    ];

    for (document, conversation, input) in cases {
        assert_eq!(extract(input, &DOCUMENT).door_height_inches, document, "document: {input:?}");
        assert_eq!(extract(input, &CONVERSATION).door_height_inches, conversation, "conversation: {input:?}");
    }
}

#[test]
fn bucket_type_examples_matching() {
    let cases: Vec<(TriState<BucketType>, &str)> = vec![
        (TriState::Known(BucketType::DriveBucket), "Bucket: Drive Bucket"),
        (TriState::Known(BucketType::StarterBucket), "bucket type: starter bucket"),
        (TriState::Known(BucketType::StarterBucket), "Bucket Type: Starter Bucket, spare drive bucket"),
        (TriState::Known(BucketType::DriveBucket), "a starter bucket and a drive bucket"),
        (TriState::Known(BucketType::StarterBucket), "starterbucket"),
        (TriState::Known(BucketType::DriveBucket), "feeds a VFD"),
        (TriState::Known(BucketType::DriveBucket), "variable frequency drive"),
        (TriState::Unknown, "a bucket of parts"),
    ];

    for (expected, input) in cases {
        assert_eq!(extract(input, &DOCUMENT).bucket_type, expected, "input: {input:?}");
    }
}

#[test]
fn handle_type_examples_matching() {
    let cases: Vec<(TriState<HandleType>, &str)> = vec![
        (TriState::Known(HandleType::UpDownHandle), "Handle: Up-Down Handle"),
        (TriState::Known(HandleType::UpDownHandle), "up down handle"),
        (TriState::Known(HandleType::RotaryHandle), "handle type: rotary handle"),
        (TriState::Known(HandleType::RotaryHandle), "Handle Type: Rotary Handle (not the up-down handle)"),
        (TriState::Known(HandleType::UpDownHandle), "an up-down handle and a rotary handle"),
        (TriState::Unknown, "handle with care"),
    ];

    for (expected, input) in cases {
        assert_eq!(extract(input, &DOCUMENT).handle_type, expected, "input: {input:?}");
    }
}

#[test]
fn cutout_keywords_by_mode() {
    // (fan, pemstud, device panel) for document then conversation, per input
    type Flags = (TriState<bool>, TriState<bool>, TriState<bool>);
    let t = TriState::Known(true);
    let u = TriState::Unknown;
    let cases: Vec<(Flags, Flags, &str)> = vec![
        ((t, u, u), (t, u, u), "fan cutout"),
        ((t, u, u), (t, u, u), "Fan: yes"),
        ((t, u, u), (t, u, u), "needs fan"),
        ((t, u, u), (u, u, u), "cooling fan"),
        ((u, t, u), (u, t, u), "with PEM stud"),
        ((u, t, u), (u, t, u), "pemstud: true"),
        ((u, u, t), (u, u, t), "device panel cutout"),
        ((u, u, t), (u, u, u), "device panel: yes"),
        ((u, u, t), (u, u, u), "control panel with pushbutton and pilot device"),
        ((u, u, u), (u, u, u), "no openings"),
    ];

    for (document, conversation, input) in cases {
        for (options, expected) in [(DOCUMENT, document), (CONVERSATION, conversation)] {
            let cutouts = extract(input, &options).cutouts;
            assert_eq!(
                (cutouts.fan, cutouts.pemstud, cutouts.device_panel),
                expected,
                "input: {input:?} ({})",
                options.mode
            );
        }
    }
}

#[test]
fn roto_tract_follows_type_and_mode() {
    let t = TriState::Known(true);
    let f = TriState::Known(false);
    let u = TriState::Unknown;
    // (document, conversation, input)
    let cases: Vec<(TriState<bool>, TriState<bool>, &str)> = vec![
        (t, t, "freedom plus flashgard with rototract"),
        (t, u, "freedom plus flashgard"),
        (t, t, "flashgard, rototract: yes"),
        (t, t, "flashgard, and a rototract please"),
        (f, f, "freedom plus with rototract"),
        (u, u, "rototract cutout"),
    ];

    for (document, conversation, input) in cases {
        assert_eq!(extract(input, &DOCUMENT).cutouts.roto_tract, document, "document: {input:?}");
        assert_eq!(extract(input, &CONVERSATION).cutouts.roto_tract, conversation, "conversation: {input:?}");
    }
}

#[test]
fn reset_ignores_text_and_follows_bucket() {
    assert_eq!(extract("drive bucket", &DOCUMENT).cutouts.reset, TriState::Known(true));
    assert_eq!(extract("starter bucket, reset cutout", &DOCUMENT).cutouts.reset, TriState::Known(false));
    assert_eq!(extract("reset cutout", &CONVERSATION).cutouts.reset, TriState::Unknown);
}

#[test]
fn thickness_examples_matching() {
    let cases: Vec<(TriState<u32>, &str)> = vec![
        (TriState::Known(14), "thickness: 14 ga"),
        (TriState::Known(12), "Door thickness 12 gauge"),
        (TriState::Known(12), "a 12 ga door"),
        (TriState::Unknown, "thickness: 16 ga"),
        // Arc rating wins over stated gauge.
        (TriState::Known(14), "freedom plus, thickness: 12 ga"),
        (TriState::Known(12), "flashgard, 14 gauge door"),
    ];

    for (expected, input) in cases {
        assert_eq!(extract(input, &DOCUMENT).door_thickness_gauge, expected, "input: {input:?}");
    }
}

#[test]
fn rule_names_are_unique() {
    let rules = rules::get();
    let mut names: Vec<&str> = rules.iter().map(|r| r.name).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len());
}
