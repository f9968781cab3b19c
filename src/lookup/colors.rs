/// Color used for clans missing from the table
pub const DEFAULT_COLOR: &str = "#333333";

/// Clan display name to hex color, keyed by exact (case-sensitive) name
const CLAN_COLORS: &[(&str, &str)] = &[
    ("PAIWOE", "#b52323"),
    ("APIBOREGE", "#b52323"),
    ("BOE ETUIEDAGAMAGE", "#b52323"),
    ("IWAGUDUDOGE", "#b52323"),
    ("AROROE", "#b52323"),
    ("BAKORO ECERAE", "#000000"),
    ("BOKODORI ECERAE", "#000000"),
    ("KIE", "#000000"),
    ("BADOJEBA", "#000000"),
];

/// Resolve the color of a clan by its display name
///
/// # Examples
/// ```
/// use bororo_clans::lookup::clan_color;
///
/// assert_eq!(clan_color("KIE"), "#000000");
/// assert_eq!(clan_color("kie"), "#333333");
/// ```
pub fn clan_color(clan_name: &str) -> &'static str {
    CLAN_COLORS
        .iter()
        .find(|(name, _)| *name == clan_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_moiety() {
        for clan in ["PAIWOE", "APIBOREGE", "BOE ETUIEDAGAMAGE", "IWAGUDUDOGE", "AROROE"] {
            assert_eq!(clan_color(clan), "#b52323");
        }
    }

    #[test]
    fn test_black_moiety() {
        for clan in ["BAKORO ECERAE", "BOKODORI ECERAE", "KIE", "BADOJEBA"] {
            assert_eq!(clan_color(clan), "#000000");
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(clan_color("Paiwoe"), DEFAULT_COLOR);
    }

    #[test]
    fn test_unknown_clan() {
        assert_eq!(clan_color("TUGAREGE"), "#333333");
        assert_eq!(clan_color(""), "#333333");
    }
}
