use crate::error::{GameDataError, Result};
use crate::types::{ClanRecord, GameData};
use std::collections::HashSet;

/// Check clan records before building
///
/// Every clan needs a non-empty, unique `clan_id`.
pub fn validate_clans(clans: &[ClanRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for clan in clans {
        if clan.clan_id.trim().is_empty() {
            return Err(GameDataError::EmptyClanId {
                clan_name: clan.clan_name.clone(),
            });
        }
        if !seen.insert(clan.clan_id.as_str()) {
            return Err(GameDataError::DuplicateClanId(clan.clan_id.clone()));
        }
    }

    Ok(())
}

/// Check that every item points at a clan present in the document
pub fn validate_game_data(data: &GameData) -> Result<()> {
    let clan_ids: HashSet<&str> = data.clans.iter().map(|clan| clan.id.as_str()).collect();

    if clan_ids.len() != data.clans.len() {
        let mut seen = HashSet::new();
        if let Some(clan) = data.clans.iter().find(|clan| !seen.insert(clan.id.as_str())) {
            return Err(GameDataError::DuplicateClanId(clan.id.clone()));
        }
    }

    for item in &data.items {
        if !clan_ids.contains(item.correct_clan_id.as_str()) {
            return Err(GameDataError::DanglingClanReference {
                item_id: item.id.clone(),
                clan_id: item.correct_clan_id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::embedded_clans;
    use crate::transform::build_game_data;
    use crate::types::OutputClan;

    #[test]
    fn test_embedded_table_is_valid() {
        let clans = embedded_clans();
        validate_clans(&clans).unwrap();
        validate_game_data(&build_game_data(&clans)).unwrap();
    }

    #[test]
    fn test_empty_clan_id() {
        let clans = vec![ClanRecord::new("KIE", " ")];
        match validate_clans(&clans) {
            Err(GameDataError::EmptyClanId { clan_name }) => assert_eq!(clan_name, "KIE"),
            _ => panic!("Expected EmptyClanId error"),
        }
    }

    #[test]
    fn test_duplicate_clan_id() {
        let clans = vec![ClanRecord::new("KIE", "kie"), ClanRecord::new("KIE 2", "kie")];
        match validate_clans(&clans) {
            Err(GameDataError::DuplicateClanId(id)) => assert_eq!(id, "kie"),
            _ => panic!("Expected DuplicateClanId error"),
        }
    }

    #[test]
    fn test_duplicate_output_clan() {
        let mut data = build_game_data(&[ClanRecord::new("KIE", "kie")]);
        data.clans.push(OutputClan {
            id: "clan_kie".to_string(),
            name: "KIE".to_string(),
        });
        assert!(matches!(
            validate_game_data(&data),
            Err(GameDataError::DuplicateClanId(_))
        ));
    }

    #[test]
    fn test_dangling_reference() {
        let clans = vec![ClanRecord::new("KIE", "kie").with_category("BAREGE", ["Ki (anta)"])];
        let mut data = build_game_data(&clans);
        data.clans.clear();

        match validate_game_data(&data) {
            Err(GameDataError::DanglingClanReference { item_id, clan_id }) => {
                assert_eq!(item_id, "item_anta_kie");
                assert_eq!(clan_id, "clan_kie");
            }
            _ => panic!("Expected DanglingClanReference error"),
        }
    }
}
