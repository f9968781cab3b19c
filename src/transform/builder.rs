use crate::lookup::{clan_color, item_icon};
use crate::parser::{parse_item, slugify};
use crate::types::{ClanRecord, GameData, OutputClan, OutputItem};

/// Build the game document from clan records
///
/// Emits one clan per record and one item per raw item string, walking
/// clans, categories and items in their given order. Nothing is sorted or
/// deduplicated.
///
/// # Arguments
/// * `clans` - Clan records in table order
///
/// # Returns
/// * `GameData` with `clans` and `items`
///
/// # Examples
/// ```
/// use bororo_clans::transform::build_game_data;
/// use bororo_clans::types::ClanRecord;
///
/// let clans = vec![ClanRecord::new("KIE", "kie").with_category("BAREGE", ["Ki (anta)"])];
/// let data = build_game_data(&clans);
/// assert_eq!(data.clans[0].id, "clan_kie");
/// assert_eq!(data.items[0].id, "item_anta_kie");
/// ```
pub fn build_game_data(clans: &[ClanRecord]) -> GameData {
    let mut data = GameData::default();

    for clan in clans {
        data.clans.push(OutputClan {
            id: clan.output_id(),
            name: clan.clan_name.clone(),
        });

        for raw in clan.data.values().flatten() {
            data.items.push(build_item(clan, raw));
        }
    }

    data
}

/// Build a single item of a clan from its raw item string
pub fn build_item(clan: &ClanRecord, raw: &str) -> OutputItem {
    let parsed = parse_item(raw);

    OutputItem {
        id: format!("item_{}_{}", slugify(&parsed.description), clan.clan_id),
        icon: item_icon(&parsed.description).to_string(),
        correct_clan_id: clan.output_id(),
        color: clan_color(&clan.clan_name).to_string(),
        clan: clan.clan_name.clone(),
        name: parsed.description,
    }
}
