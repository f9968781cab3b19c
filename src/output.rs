use crate::error::Result;
use crate::types::GameData;
use std::fs;
use std::path::Path;

/// Default location of the generated document, relative to the project root
pub const DEFAULT_OUTPUT_PATH: &str = "public/game-data.json";

/// Serialize the document as UTF-8 JSON text
///
/// Pretty output uses 2-space indentation. Non-ASCII characters (accents,
/// emoji) are written literally in both modes.
///
/// # Arguments
/// * `data` - The document to serialize
/// * `compact` - Single-line output instead of indented output
///
/// # Examples
/// ```
/// use bororo_clans::output::to_json_string;
/// use bororo_clans::types::GameData;
///
/// let json = to_json_string(&GameData::default(), false).unwrap();
/// assert_eq!(json, "{\n  \"clans\": [],\n  \"items\": []\n}");
/// ```
pub fn to_json_string(data: &GameData, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(json)
}

/// Write the document to `path`, replacing any existing file
///
/// The parent directory must already exist.
pub fn write_game_data(data: &GameData, path: &Path, compact: bool) -> Result<()> {
    let json = to_json_string(data, compact)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameDataError;
    use crate::types::{OutputClan, OutputItem};

    fn sample() -> GameData {
        GameData {
            clans: vec![OutputClan {
                id: "clan_kie".to_string(),
                name: "KIE".to_string(),
            }],
            items: vec![OutputItem {
                id: "item_cágado_kie".to_string(),
                name: "cágado".to_string(),
                icon: "✨".to_string(),
                correct_clan_id: "clan_kie".to_string(),
                color: "#000000".to_string(),
                clan: "KIE".to_string(),
            }],
        }
    }

    #[test]
    fn test_pretty_layout() {
        let json = to_json_string(&sample(), false).unwrap();
        let expected = r##"{
  "clans": [
    {
      "id": "clan_kie",
      "name": "KIE"
    }
  ],
  "items": [
    {
      "id": "item_cágado_kie",
      "name": "cágado",
      "icon": "✨",
      "correct_clan_id": "clan_kie",
      "color": "#000000",
      "clan": "KIE"
    }
  ]
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let json = to_json_string(&sample(), true).unwrap();
        assert!(json.contains("cágado"));
        assert!(json.contains("✨"));
        assert!(!json.contains("\\u"));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_game_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game-data.json");

        write_game_data(&sample(), &path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: GameData = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game-data.json");
        fs::write(&path, "stale contents that are longer than the new document").unwrap();

        write_game_data(&GameData::default(), &path, true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"clans":[],"items":[]}"#);
    }

    #[test]
    fn test_write_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("game-data.json");

        let result = write_game_data(&sample(), &path, false);
        assert!(matches!(result, Err(GameDataError::IoError(_))));
    }
}
