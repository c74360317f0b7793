//! Built-in anchor catalogs for the room asset.

use std::collections::HashMap;

use roomview_core::FixtureConfig;

/// Ceiling spot mounts, in diagnostic order.
pub const SPOT_ANCHORS: &[&str] = &[
    "Spot_001", "Spot_002", "Spot_003", "Spot_004", "Spot_005", "Spot_006", "Spot_007",
    "Spot_008",
];

/// Ceiling LED strip runs, in diagnostic order.
pub const STRIP_ANCHORS: &[&str] = &[
    "ceilinglight_001",
    "ceilinglight_002",
    "ceilinglight_003",
    "ceilinglight_004",
];

/// Per-strip configs for the built-in room.
///
/// Strips 1 and 3 run along the short walls, 2 and 4 are the long runs
/// turned a quarter turn about Z.
pub fn default_strip_configs() -> HashMap<String, FixtureConfig> {
    STRIP_ANCHORS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let long_run = i % 2 == 1;
            let config = FixtureConfig {
                position: Some([0.0, 0.0, 0.01]),
                rotation_deg: Some([0.0, 0.0, if long_run { 90.0 } else { 0.0 }]),
                target: Some([0.0, 1.0, 0.0]),
                shadow_position: Some([0.0, 0.0, 0.0]),
                width: Some(0.01),
                height: Some(if long_run { 3.6 } else { 1.75 }),
                color: Some(0xffffff),
                intensity: Some(50.0),
            };
            (name.to_string(), config)
        })
        .collect()
}
