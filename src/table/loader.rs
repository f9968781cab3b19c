use crate::error::{GameDataError, Result};
use crate::types::ClanRecord;
use std::fs;
use std::path::Path;

/// Parse a clan table from JSON text
///
/// The table is an array of `{clan_name, clan_id, data}` objects where
/// `data` maps category names to raw item strings. Category order follows
/// the key order of the document.
///
/// # Arguments
/// * `json` - JSON text of the table
///
/// # Returns
/// * `Ok(Vec<ClanRecord>)` - Clan records in document order
/// * `Err(GameDataError)` - If the text is not a valid table
///
/// # Examples
/// ```
/// use bororo_clans::table::load_table;
///
/// let clans = load_table(r#"[{"clan_name": "KIE", "clan_id": "kie",
///     "data": {"BAREGE": ["Ki (anta)"]}}]"#).unwrap();
/// assert_eq!(clans[0].data["BAREGE"], vec!["Ki (anta)"]);
/// ```
pub fn load_table(json: &str) -> Result<Vec<ClanRecord>> {
    // Category key order only survives direct deserialization.
    if !json.trim_start().starts_with('[') {
        return Err(GameDataError::InvalidTable(
            "expected a top-level array of clans".to_string(),
        ));
    }

    Ok(serde_json::from_str(json)?)
}

/// Read and parse a clan table from a JSON file
pub fn load_table_file(path: &Path) -> Result<Vec<ClanRecord>> {
    let json = fs::read_to_string(path)?;
    load_table(&json)
}
