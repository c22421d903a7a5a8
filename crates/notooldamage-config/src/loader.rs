//! YAML loading of the `areas` mapping.

use std::fs;
use std::path::Path;

use notooldamage_core::record::RawEntry;
use serde_json::Value as Json;
use serde_yaml::Value;

use crate::error::ConfigError;

/// Contents written when no configuration file exists yet.
pub const DEFAULT_CONFIG: &str = "\
# NoToolDamage configuration.
#
# Tools and armor used by players standing inside any area below do not
# lose durability. Each area is a box of blocks in one world; both corners
# are inclusive and x1, y1, z1 must not exceed x2, y2, z2.
#
# areas:
#   spawn:
#     world: world
#     x1: -64
#     y1: 0
#     z1: -64
#     x2: 64
#     y2: 255
#     z2: 64
areas: {}
";

/// Parses configuration text into the entries under `areas`, in file order.
///
/// Entries are never rejected here: every key is rendered as text and every
/// value is carried over, so a malformed area is reported by validation
/// without hiding the others.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed YAML, and
/// `ConfigError::MissingAreas` or `ConfigError::AreasNotSection` when `areas`
/// is absent or not a mapping.
pub fn parse_areas(text: &str) -> Result<Vec<RawEntry>, ConfigError> {
    let document: Value = serde_yaml::from_str(text)?;
    let areas = match document.get("areas") {
        None | Some(Value::Null) => return Err(ConfigError::MissingAreas),
        Some(Value::Mapping(areas)) => areas,
        Some(_) => return Err(ConfigError::AreasNotSection),
    };

    Ok(areas
        .iter()
        .map(|(key, value)| RawEntry::new(key_text(key), to_json(value)))
        .collect())
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, otherwise any error
/// from [`parse_areas`].
pub fn load_areas(path: &Path) -> Result<Vec<RawEntry>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_areas(&text)
}

/// Writes [`DEFAULT_CONFIG`] to `path` unless a file is already there.
///
/// Returns `true` if the file was created.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the parent directory or file cannot be
/// created.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
    Ok(true)
}

/// Renders a mapping key as text. Scalars print bare; `~` stands for null
/// and collections use YAML flow style.
fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "~".to_owned(),
        Value::Bool(key) => key.to_string(),
        Value::Number(key) => key.to_string(),
        Value::String(key) => key.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(key_text).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", key_text(k), key_text(v)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, key_text(&tagged.value)),
    }
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(value) => Json::Bool(*value),
        Value::Number(value) => number_to_json(value),
        Value::String(value) => Json::String(value.clone()),
        Value::Sequence(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Mapping(map) => Json::Object(
            map.iter()
                .map(|(key, value)| (key_text(key), to_json(value)))
                .collect(),
        ),
        Value::Tagged(tagged) => to_json(&tagged.value),
    }
}

/// JSON has no NaN or infinity; those keep their YAML spelling as a string
/// so they still read as "not an integer".
fn number_to_json(number: &serde_yaml::Number) -> Json {
    if let Some(value) = number.as_i64() {
        Json::from(value)
    } else if let Some(value) = number.as_u64() {
        Json::from(value)
    } else {
        number
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| Json::String(number.to_string()), Json::Number)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::{DEFAULT_CONFIG, ensure_default_config, load_areas, parse_areas};
    use crate::error::ConfigError;

    #[test]
    fn test_parse_areas_keeps_file_order() {
        // Arrange
        let text = "\
areas:
  zeta:
    world: world
    x1: 0
    y1: 0
    z1: 0
    x2: 1
    y2: 1
    z2: 1
  alpha:
    world: world_nether
    x1: -3
    y1: 0
    z1: -3
    x2: 3
    y2: 64
    z2: 3
";

        // Act
        let entries = parse_areas(text).unwrap();

        // Assert
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(entries[1].value["world"], json!("world_nether"));
        assert_eq!(entries[1].value["x1"], json!(-3));
    }

    #[test]
    fn test_parse_areas_passes_through_malformed_values() {
        let text = "areas:\n  broken: 12\n  floaty:\n    x1: 1.5\n  7: {}\n";

        let entries = parse_areas(text).unwrap();

        assert_eq!(entries[0].value, json!(12));
        assert_eq!(entries[1].value["x1"], json!(1.5));
        assert_eq!(entries[2].key, "7");
    }

    #[test]
    fn test_parse_areas_requires_areas() {
        assert!(matches!(
            parse_areas("other: 1\n"),
            Err(ConfigError::MissingAreas)
        ));
        assert!(matches!(
            parse_areas("areas:\n"),
            Err(ConfigError::MissingAreas)
        ));
    }

    #[test]
    fn test_parse_areas_rejects_non_mapping_areas() {
        let result = parse_areas("areas:\n  - one\n  - two\n");

        assert!(matches!(result, Err(ConfigError::AreasNotSection)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid config - 'areas' is not a section."
        );
    }

    #[test]
    fn test_parse_areas_rejects_invalid_yaml() {
        assert!(matches!(
            parse_areas("areas: [unterminated\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_default_config_has_no_areas() {
        assert!(parse_areas(DEFAULT_CONFIG).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_default_config_writes_once() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugins").join("config.yml");

        // Act
        let created = ensure_default_config(&path).unwrap();
        fs::write(&path, "areas: {}\n# edited\n").unwrap();
        let created_again = ensure_default_config(&path).unwrap();

        // Assert
        assert!(created);
        assert!(!created_again);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "areas: {}\n# edited\n"
        );
    }

    #[test]
    fn test_load_areas_reports_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = load_areas(&dir.path().join("config.yml"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_unusual_keys_do_not_hide_other_areas() {
        // Arrange
        let text = "areas: {weird: {world: w, ~: 1}, [1, 2]: {world: w}, \
                    spawn: {world: world, x1: 0, y1: 0, z1: 0, x2: 1, y2: 1, z2: 1}}\n";

        // Act
        let entries = parse_areas(text).unwrap();

        // Assert
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["weird", "[1, 2]", "spawn"]);
        assert_eq!(entries[0].value["~"], json!(1));
        assert_eq!(entries[2].value["x2"], json!(1));
    }

    #[test]
    fn test_non_finite_floats_are_kept_as_text() {
        let text = "areas:\n  spawn:\n    x1: .nan\n    x2: .inf\n    y1: -.inf\n";

        let entries = parse_areas(text).unwrap();

        let record = &entries[0].value;
        assert!(record["x1"].is_string());
        assert!(record["x2"].is_string());
        assert!(record["y1"].is_string());
    }

    #[test]
    fn test_tagged_values_are_unwrapped() {
        let entries = parse_areas("areas:\n  spawn:\n    x1: !custom 4\n").unwrap();

        assert_eq!(entries[0].value["x1"], json!(4));
    }
}
