//! Raw record builders.

use notooldamage_core::record::RawEntry;
use serde_json::{Value, json};

/// Builds a well-formed area record from `[x1, y1, z1, x2, y2, z2]`.
#[must_use]
pub fn area_record(world: &str, corners: [i32; 6]) -> Value {
    let [x1, y1, z1, x2, y2, z2] = corners;
    json!({
        "world": world,
        "x1": x1,
        "y1": y1,
        "z1": z1,
        "x2": x2,
        "y2": y2,
        "z2": z2,
    })
}

/// Builds a named entry holding `area_record(world, corners)`.
#[must_use]
pub fn area_entry(key: &str, world: &str, corners: [i32; 6]) -> RawEntry {
    RawEntry::new(key, area_record(world, corners))
}
