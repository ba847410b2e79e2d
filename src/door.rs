//! The door specification record and its value domains.
//!
//! Field names and nesting are the external schema consumed by downstream
//! tooling: serde renames below must stay in sync with the JSON keys written
//! by the persistence sink (`"Type"`, `"Arc Rated"`, `"Door Height (inches)"`,
//! ...). Unknown top-level values serialize as `null`; unknown cutouts are
//! omitted from the `"Cutouts"` object.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ARC_RATED_GAUGE: u32 = 12;
pub const NON_ARC_GAUGE: u32 = 14;

/// A value that is either a concrete domain member or explicitly unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriState<T> {
    Known(T),
    Unknown,
}

impl<T> Default for TriState<T> {
    fn default() -> Self {
        TriState::Unknown
    }
}

impl<T> TriState<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, TriState::Known(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TriState::Unknown)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            TriState::Known(v) => Some(v),
            TriState::Unknown => None,
        }
    }

    /// Keep `self` when known, otherwise take `fallback`.
    pub fn or(self, fallback: TriState<T>) -> TriState<T> {
        match self {
            TriState::Known(_) => self,
            TriState::Unknown => fallback,
        }
    }
}

impl<T: Copy> TriState<T> {
    pub fn known(&self) -> Option<T> {
        self.as_option().copied()
    }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Known(v) => v.fmt(f),
            TriState::Unknown => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorType {
    #[serde(rename = "Freedom Plus")]
    FreedomPlus,
    #[serde(rename = "Freedom Plus FlashGard")]
    FreedomPlusFlashGard,
}

impl DoorType {
    pub fn label(self) -> &'static str {
        match self {
            DoorType::FreedomPlus => "Freedom Plus",
            DoorType::FreedomPlusFlashGard => "Freedom Plus FlashGard",
        }
    }

    /// FlashGard doors are the arc-rated line.
    pub fn is_arc_rated(self) -> bool {
        matches!(self, DoorType::FreedomPlusFlashGard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketType {
    #[serde(rename = "Drive Bucket")]
    DriveBucket,
    #[serde(rename = "Starter Bucket")]
    StarterBucket,
}

impl BucketType {
    pub fn label(self) -> &'static str {
        match self {
            BucketType::DriveBucket => "Drive Bucket",
            BucketType::StarterBucket => "Starter Bucket",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleType {
    #[serde(rename = "Up-Down Handle")]
    UpDownHandle,
    #[serde(rename = "Rotary Handle")]
    RotaryHandle,
}

impl HandleType {
    pub fn label(self) -> &'static str {
        match self {
            HandleType::UpDownHandle => "Up-Down Handle",
            HandleType::RotaryHandle => "Rotary Handle",
        }
    }
}

macro_rules! label_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

label_display!(DoorType, BucketType, HandleType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutoutKind {
    RotoTract,
    Reset,
    Fan,
    Pemstud,
    DevicePanel,
}

impl CutoutKind {
    pub const ALL: [CutoutKind; 5] =
        [CutoutKind::RotoTract, CutoutKind::Reset, CutoutKind::Fan, CutoutKind::Pemstud, CutoutKind::DevicePanel];

    /// Key used inside the `"Cutouts"` object.
    pub fn key(self) -> &'static str {
        match self {
            CutoutKind::RotoTract => "RotoTract Cutout",
            CutoutKind::Reset => "Reset Cutout",
            CutoutKind::Fan => "Fan Cutout",
            CutoutKind::Pemstud => "Pemstud",
            CutoutKind::DevicePanel => "Device Panel Cutout",
        }
    }
}

/// Openings requested on the door panel. Each cutout is resolved on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cutouts {
    #[serde(rename = "RotoTract Cutout", default, skip_serializing_if = "TriState::is_unknown")]
    pub roto_tract: TriState<bool>,
    #[serde(rename = "Reset Cutout", default, skip_serializing_if = "TriState::is_unknown")]
    pub reset: TriState<bool>,
    #[serde(rename = "Fan Cutout", default, skip_serializing_if = "TriState::is_unknown")]
    pub fan: TriState<bool>,
    #[serde(rename = "Pemstud", default, skip_serializing_if = "TriState::is_unknown")]
    pub pemstud: TriState<bool>,
    #[serde(rename = "Device Panel Cutout", default, skip_serializing_if = "TriState::is_unknown")]
    pub device_panel: TriState<bool>,
}

impl Cutouts {
    pub fn get(&self, kind: CutoutKind) -> TriState<bool> {
        match kind {
            CutoutKind::RotoTract => self.roto_tract,
            CutoutKind::Reset => self.reset,
            CutoutKind::Fan => self.fan,
            CutoutKind::Pemstud => self.pemstud,
            CutoutKind::DevicePanel => self.device_panel,
        }
    }

    pub fn set(&mut self, kind: CutoutKind, value: TriState<bool>) {
        let slot = match kind {
            CutoutKind::RotoTract => &mut self.roto_tract,
            CutoutKind::Reset => &mut self.reset,
            CutoutKind::Fan => &mut self.fan,
            CutoutKind::Pemstud => &mut self.pemstud,
            CutoutKind::DevicePanel => &mut self.device_panel,
        };
        *slot = value;
    }

    /// Cutouts with a resolved value, in schema order.
    pub fn populated(&self) -> Vec<(CutoutKind, bool)> {
        CutoutKind::ALL.iter().filter_map(|&k| self.get(k).known().map(|v| (k, v))).collect()
    }
}

/// One attribute of a [`DoorSpecification`], in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DoorType,
    ArcRated,
    DoorHeight,
    BucketType,
    HandleType,
    Cutout(CutoutKind),
    DoorThickness,
}

impl Field {
    pub const COUNT: usize = 11;

    pub const ALL: [Field; Field::COUNT] = [
        Field::DoorType,
        Field::ArcRated,
        Field::DoorHeight,
        Field::BucketType,
        Field::HandleType,
        Field::Cutout(CutoutKind::RotoTract),
        Field::Cutout(CutoutKind::Reset),
        Field::Cutout(CutoutKind::Fan),
        Field::Cutout(CutoutKind::Pemstud),
        Field::Cutout(CutoutKind::DevicePanel),
        Field::DoorThickness,
    ];

    /// Position in [`Field::ALL`]; used to index fixed-size per-field tables.
    pub fn index(self) -> usize {
        match self {
            Field::DoorType => 0,
            Field::ArcRated => 1,
            Field::DoorHeight => 2,
            Field::BucketType => 3,
            Field::HandleType => 4,
            Field::Cutout(CutoutKind::RotoTract) => 5,
            Field::Cutout(CutoutKind::Reset) => 6,
            Field::Cutout(CutoutKind::Fan) => 7,
            Field::Cutout(CutoutKind::Pemstud) => 8,
            Field::Cutout(CutoutKind::DevicePanel) => 9,
            Field::DoorThickness => 10,
        }
    }

    /// JSON key of the field (cutouts use their key inside `"Cutouts"`).
    pub fn key(self) -> &'static str {
        match self {
            Field::DoorType => "Type",
            Field::ArcRated => "Arc Rated",
            Field::DoorHeight => "Door Height (inches)",
            Field::BucketType => "Bucket Type",
            Field::HandleType => "Handle Type",
            Field::Cutout(kind) => kind.key(),
            Field::DoorThickness => "Door Thickness (Ga)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured description of an MCC door panel.
///
/// Created fresh by every extraction call. Engine output always satisfies the
/// structural invariants checked by [`DoorSpecification::violations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSpecification {
    #[serde(rename = "Type")]
    pub door_type: TriState<DoorType>,
    #[serde(rename = "Arc Rated")]
    pub arc_rated: TriState<bool>,
    #[serde(rename = "Door Height (inches)")]
    pub door_height_inches: TriState<u32>,
    #[serde(rename = "Bucket Type")]
    pub bucket_type: TriState<BucketType>,
    #[serde(rename = "Handle Type")]
    pub handle_type: TriState<HandleType>,
    #[serde(rename = "Cutouts")]
    pub cutouts: Cutouts,
    #[serde(rename = "Door Thickness (Ga)")]
    pub door_thickness_gauge: TriState<u32>,
}

impl Default for DoorSpecification {
    fn default() -> Self {
        Self::unknown()
    }
}

impl DoorSpecification {
    /// A record with every field unknown.
    pub fn unknown() -> Self {
        DoorSpecification {
            door_type: TriState::Unknown,
            arc_rated: TriState::Unknown,
            door_height_inches: TriState::Unknown,
            bucket_type: TriState::Unknown,
            handle_type: TriState::Unknown,
            cutouts: Cutouts::default(),
            door_thickness_gauge: TriState::Unknown,
        }
    }

    /// The record the lenient policy produces when nothing was found.
    pub fn canonical_default() -> Self {
        DoorSpecification {
            door_type: TriState::Known(DoorType::FreedomPlus),
            arc_rated: TriState::Known(false),
            door_height_inches: TriState::Known(48),
            bucket_type: TriState::Known(BucketType::StarterBucket),
            handle_type: TriState::Known(HandleType::RotaryHandle),
            cutouts: Cutouts {
                roto_tract: TriState::Known(false),
                reset: TriState::Known(false),
                fan: TriState::Known(false),
                pemstud: TriState::Known(false),
                device_panel: TriState::Known(false),
            },
            door_thickness_gauge: TriState::Known(NON_ARC_GAUGE),
        }
    }

    /// Whether `field` holds a concrete value.
    pub fn is_known(&self, field: Field) -> bool {
        match field {
            Field::DoorType => self.door_type.is_known(),
            Field::ArcRated => self.arc_rated.is_known(),
            Field::DoorHeight => self.door_height_inches.is_known(),
            Field::BucketType => self.bucket_type.is_known(),
            Field::HandleType => self.handle_type.is_known(),
            Field::Cutout(kind) => self.cutouts.get(kind).is_known(),
            Field::DoorThickness => self.door_thickness_gauge.is_known(),
        }
    }

    /// Human-readable value of `field`, `"unknown"` when unresolved.
    pub fn value_label(&self, field: Field) -> String {
        match field {
            Field::DoorType => self.door_type.to_string(),
            Field::ArcRated => self.arc_rated.to_string(),
            Field::DoorHeight => self.door_height_inches.to_string(),
            Field::BucketType => self.bucket_type.to_string(),
            Field::HandleType => self.handle_type.to_string(),
            Field::Cutout(kind) => self.cutouts.get(kind).to_string(),
            Field::DoorThickness => self.door_thickness_gauge.to_string(),
        }
    }

    /// True when no field is unknown.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|&f| self.is_known(f))
    }

    /// Structural invariants broken by this record, as short descriptions.
    ///
    /// Records produced by the engine always return an empty list; hand-built
    /// or deserialized records may not.
    pub fn violations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();

        if let Some(door_type) = self.door_type.known() {
            if self.arc_rated.known() != Some(door_type.is_arc_rated()) {
                out.push("arc rating must follow door type");
            }
        } else if self.arc_rated.is_known() {
            out.push("arc rating known without a door type");
        }

        if let Some(arc) = self.arc_rated.known() {
            let expected = if arc { ARC_RATED_GAUGE } else { NON_ARC_GAUGE };
            if self.door_thickness_gauge.known() != Some(expected) {
                out.push("gauge must be 12 for arc-rated doors and 14 otherwise");
            }
        }

        if self.cutouts.roto_tract.known() == Some(true)
            && self.door_type.known() != Some(DoorType::FreedomPlusFlashGard)
        {
            out.push("rototract cutout requires a FlashGard door");
        }

        match self.bucket_type.known() {
            Some(BucketType::DriveBucket) if self.cutouts.reset.known() != Some(true) => {
                out.push("drive buckets need a reset cutout");
            }
            Some(BucketType::StarterBucket) if self.cutouts.reset.known() == Some(true) => {
                out.push("starter buckets have no reset cutout");
            }
            _ => {}
        }

        if self.door_height_inches.known() == Some(0) {
            out.push("door height must be positive");
        }

        out
    }

    /// Pretty-printed JSON in the external schema.
    pub fn to_json_pretty(&self) -> String {
        // Every field is a plain value; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// The plain-text summary layout: one `key: value` line per field, cutouts
/// nested two spaces deep. Unknown values print as `None`.
impl fmt::Display for DoorSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn text<T: fmt::Display>(v: &TriState<T>) -> String {
            v.as_option().map_or_else(|| "None".to_string(), |v| v.to_string())
        }
        fn flag(v: &TriState<bool>) -> String {
            match v.known() {
                Some(true) => "True".to_string(),
                Some(false) => "False".to_string(),
                None => "None".to_string(),
            }
        }

        writeln!(f, "{}: {}", Field::DoorType, text(&self.door_type))?;
        writeln!(f, "{}: {}", Field::ArcRated, flag(&self.arc_rated))?;
        writeln!(f, "{}: {}", Field::DoorHeight, text(&self.door_height_inches))?;
        writeln!(f, "{}: {}", Field::BucketType, text(&self.bucket_type))?;
        writeln!(f, "{}: {}", Field::HandleType, text(&self.handle_type))?;
        writeln!(f, "Cutouts:")?;
        for (kind, value) in self.cutouts.populated() {
            writeln!(f, "  {}: {}", kind.key(), if value { "True" } else { "False" })?;
        }
        writeln!(f, "{}: {}", Field::DoorThickness, text(&self.door_thickness_gauge))
    }
}
