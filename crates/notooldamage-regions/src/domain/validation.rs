//! Record validation.
//!
//! Every field check runs and reports on its own; validity is decided from
//! the collected diagnostics afterwards, so one pass surfaces every problem
//! in a record.

use notooldamage_core::diagnostic::Diagnostic;
use notooldamage_core::record::RawRecord;
use notooldamage_core::world::WorldDirectory;
use serde_json::Value;

use super::region::{BlockCoords, Region};

/// Key holding the world identifier.
pub const WORLD_KEY: &str = "world";

/// Coordinate keys, lower corner first.
pub const COORDINATE_KEYS: [&str; 6] = ["x1", "y1", "z1", "x2", "y2", "z2"];

/// A record that passed validation, with any advisory diagnostics raised
/// along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// The region built from the record.
    pub region: Region,
    /// Non-fatal diagnostics (unknown world, unknown keys).
    pub advisories: Vec<Diagnostic>,
}

/// Validates one raw record named `name`.
///
/// # Errors
///
/// Returns every diagnostic raised, errors and advisories alike, when any
/// coordinate is missing or not an integer, the world is missing or not a
/// string, or a lower bound exceeds its upper bound.
pub fn validate_record(
    name: &str,
    record: &RawRecord,
    worlds: &dyn WorldDirectory,
) -> Result<Validated, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    let coordinates: Vec<Option<i32>> = COORDINATE_KEYS
        .iter()
        .map(|field| read_coordinate(name, record, field, &mut diagnostics))
        .collect();

    let world = read_world(name, record, worlds, &mut diagnostics);

    let corners = match coordinates.as_slice() {
        [Some(x1), Some(y1), Some(z1), Some(x2), Some(y2), Some(z2)] => {
            let min = BlockCoords::new(*x1, *y1, *z1);
            let max = BlockCoords::new(*x2, *y2, *z2);
            check_ordering(name, min, max, &mut diagnostics);
            Some((min, max))
        }
        _ => None,
    };

    check_unknown_keys(name, record, &mut diagnostics);

    if diagnostics.iter().any(Diagnostic::is_error) {
        return Err(diagnostics);
    }

    let (Some(world), Some((min, max))) = (world, corners) else {
        return Err(diagnostics);
    };

    match Region::new(name, world, min, max) {
        Ok(region) => Ok(Validated {
            region,
            advisories: diagnostics,
        }),
        Err(e) => {
            diagnostics.push(Diagnostic::error(format!("Area '{name}' is invalid: {e}")));
            Err(diagnostics)
        }
    }
}

fn read_coordinate(
    name: &str,
    record: &RawRecord,
    field: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<i32> {
    match record.get(field) {
        None | Some(Value::Null) => {
            diagnostics.push(Diagnostic::error(format!(
                "Area '{name}' is missing {field}!"
            )));
            None
        }
        Some(value) => {
            let coordinate = value.as_i64().and_then(|v| i32::try_from(v).ok());
            if coordinate.is_none() {
                diagnostics.push(Diagnostic::error(format!(
                    "Area '{name}' has an invalid {field}: {field} must be an integer!"
                )));
            }
            coordinate
        }
    }
}

fn read_world(
    name: &str,
    record: &RawRecord,
    worlds: &dyn WorldDirectory,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    match record.get(WORLD_KEY) {
        None | Some(Value::Null) => {
            diagnostics.push(Diagnostic::error(format!("Area '{name}' has no world!")));
            None
        }
        Some(Value::String(world)) => {
            if !worlds.world_exists(world) {
                diagnostics.push(Diagnostic::warning(format!(
                    "Area '{name}' refers to world '{world}', which doesn't exist!"
                )));
            }
            Some(world.clone())
        }
        Some(_) => {
            diagnostics.push(Diagnostic::error(format!(
                "Area '{name}' has an invalid world: world must be a string!"
            )));
            None
        }
    }
}

fn check_ordering(
    name: &str,
    min: BlockCoords,
    max: BlockCoords,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for (axis, lo, hi) in [('x', min.x, max.x), ('y', min.y, max.y), ('z', min.z, max.z)] {
        if lo > hi {
            diagnostics.push(Diagnostic::error(format!(
                "Area '{name}' has invalid {axis} coords: {axis}1 ({lo}) must not be greater than {axis}2 ({hi})!"
            )));
        }
    }
}

fn check_unknown_keys(name: &str, record: &RawRecord, diagnostics: &mut Vec<Diagnostic>) {
    let unknown: Vec<&str> = record
        .keys()
        .map(String::as_str)
        .filter(|key| *key != WORLD_KEY && !COORDINATE_KEYS.contains(key))
        .collect();
    if !unknown.is_empty() {
        diagnostics.push(Diagnostic::warning(format!(
            "Area '{name}' has unknown values: [{}]",
            unknown.join(", ")
        )));
    }
}
