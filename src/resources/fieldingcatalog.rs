//! Fielding position catalog resource.
//!
//! The catalog is the static table every marker, fielder, label and dropdown
//! entry is built from. [`FieldingCatalog::builtin`] returns the standard
//! eighteen positions; a custom layout can be loaded from JSON:
//!
//! ```json
//! [
//!   { "key": "wicket-keeper", "x": 0.0, "z": 12.0, "color": 16711680,
//!     "desc": "Directly behind the stumps..." }
//! ]
//! ```
//!
//! Coordinates are on the ground plane with the batting end at `+z` and the
//! off side at `+x` for a right-handed batter.

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldingPosition {
    pub key: String,
    pub x: f32,
    pub z: f32,
    /// `0xRRGGBB`
    pub color: u32,
    pub desc: String,
}

impl FieldingPosition {
    pub fn display_name(&self) -> String {
        display_name(&self.key)
    }
}

/// Turn a catalog key into the text shown to the user: `"fine-leg"` becomes
/// `"fine leg"`.
pub fn display_name(key: &str) -> String {
    key.replace('-', " ")
}

#[derive(Resource, Debug, Clone)]
pub struct FieldingCatalog {
    entries: Vec<FieldingPosition>,
    index: FxHashMap<String, usize>,
}

impl FieldingCatalog {
    /// Build a catalog, validating the entries.
    pub fn new(entries: Vec<FieldingPosition>) -> Result<Self, String> {
        if entries.is_empty() {
            return Err("Fielding catalog is empty".to_string());
        }
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(format!("Fielding position #{} has an empty key", i));
            }
            if !entry.x.is_finite() || !entry.z.is_finite() {
                return Err(format!(
                    "Fielding position '{}' has non-finite coordinates",
                    entry.key
                ));
            }
            if entry.color > 0xff_ffff {
                return Err(format!(
                    "Fielding position '{}' color {:#x} is not a 0xRRGGBB value",
                    entry.key, entry.color
                ));
            }
            if index.insert(entry.key.clone(), i).is_some() {
                return Err(format!("Duplicate fielding position key '{}'", entry.key));
            }
        }
        Ok(Self { entries, index })
    }

    /// The standard eighteen-position layout.
    pub fn builtin() -> Self {
        let entries = BUILTIN_POSITIONS
            .iter()
            .map(|(key, x, z, color, desc)| FieldingPosition {
                key: key.to_string(),
                x: *x,
                z: *z,
                color: *color,
                desc: desc.to_string(),
            })
            .collect();
        // The built-in table is unique and finite.
        let mut index = FxHashMap::default();
        for (i, (key, ..)) in BUILTIN_POSITIONS.iter().enumerate() {
            index.insert(key.to_string(), i);
        }
        Self { entries, index }
    }

    /// Parse a JSON array of positions.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: Vec<FieldingPosition> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse positions JSON: {}", e))?;
        Self::new(entries)
    }

    /// Load a custom layout from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read positions file {}: {}", path.display(), e))?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} fielding positions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize the layout as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("Failed to serialize positions: {}", e))
    }

    pub fn get(&self, key: &str) -> Option<&FieldingPosition> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn at(&self, index: usize) -> Option<&FieldingPosition> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldingPosition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FieldingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_POSITIONS: [(&str, f32, f32, u32, &str); 18] = [
    (
        "wicket-keeper",
        0.0,
        12.0,
        0xff0000,
        "Directly behind the stumps, responsible for catching edges and stumping batsmen. The wicket-keeper is the only fielder allowed to wear gloves and leg pads.",
    ),
    (
        "1st-slip",
        2.0,
        12.0,
        0xff4500,
        "Close catching position to the wicket-keeper's right (for right-handed batsmen). First slip is considered one of the most important catching positions.",
    ),
    (
        "2nd-slip",
        3.5,
        11.5,
        0xff6347,
        "Next to first slip, another catching position for edges. Second slip is slightly wider than first slip.",
    ),
    (
        "3rd-slip",
        5.0,
        11.0,
        0xff7f50,
        "Rarely used in modern cricket, positioned further from the batsman. Used when conditions favor significant swing or seam movement.",
    ),
    (
        "gully",
        6.0,
        9.0,
        0xffa500,
        "Wider than slips, catches edges that fly squarer. The gully fielder needs quick reflexes as balls come fast.",
    ),
    (
        "silly-point",
        2.5,
        8.5,
        0xf0e68c,
        "Very close to the batsman on the off side, just in front of square. Silly point waits for bat-pad catches and usually wears a helmet.",
    ),
    (
        "point",
        8.0,
        5.0,
        0xffd700,
        "Saves runs on the off side and stops cuts. Point requires agility and a strong throwing arm.",
    ),
    (
        "cover",
        6.0,
        0.0,
        0xadff2f,
        "Covers the area between point and mid-off. Cover fielders need to be quick to stop drives through the covers.",
    ),
    (
        "mid-off",
        0.0,
        -5.0,
        0x32cd32,
        "Stops straight drives and off-side shots. Mid-off is often positioned slightly straighter than cover.",
    ),
    (
        "mid-on",
        0.0,
        5.0,
        0x00fa9a,
        "Stops straight drives and on-side shots. Mid-on is the leg-side equivalent of mid-off.",
    ),
    (
        "midwicket",
        -6.0,
        0.0,
        0x40e0d0,
        "Covers the area between square leg and mid-on. Midwicket needs to be alert for shots played off the hips.",
    ),
    (
        "square-leg",
        -8.0,
        5.0,
        0x1e90ff,
        "Leg side equivalent of point. Square leg fields shots played square of the wicket on the leg side.",
    ),
    (
        "fine-leg",
        -4.0,
        12.0,
        0x4169e1,
        "Close to the boundary behind the batsman on the leg side. Fine leg often fields tickles down the leg side.",
    ),
    (
        "third-man",
        4.0,
        12.0,
        0x8a2be2,
        "Behind the batsman on the off side, near the boundary. Third man fields edges that go fine on the off side.",
    ),
    (
        "long-off",
        0.0,
        -18.0,
        0x9932cc,
        "Deep fielding position straight down the ground. Long-off is positioned on the boundary to catch lofted shots.",
    ),
    (
        "long-on",
        0.0,
        18.0,
        0xda70d6,
        "Deep fielding position straight on the leg side. Long-on fields big hits straight down the ground on the leg side.",
    ),
    (
        "deep-midwicket",
        -12.0,
        8.0,
        0xff69b4,
        "Deep fielding position on the leg side. Deep midwicket is positioned to catch lofted leg-side shots.",
    ),
    (
        "cow-corner",
        -15.0,
        12.0,
        0xff1493,
        "Unofficial position between deep midwicket and long-on where batsmen often hit lofted shots. The name comes from rural cricket where fields might actually have cows!",
    ),
];
