use crate::types::ParsedItem;

/// Split a raw item string of the form `"Name (description)"`
///
/// Only the first `(` separates name from description. The description is
/// the trimmed remainder with at most one trailing `)` removed; any other
/// parentheses stay as literal text. Without a `(` the trimmed string is
/// used for both fields.
///
/// # Arguments
/// * `raw` - Raw item string from the clan table
///
/// # Returns
/// * `ParsedItem` with the native name and the description
///
/// # Examples
/// ```
/// use bororo_clans::parser::parse_item;
///
/// let item = parse_item("Nabure (ararapiranga)");
/// assert_eq!(item.name, "Nabure");
/// assert_eq!(item.description, "ararapiranga");
///
/// let item = parse_item("Torowa");
/// assert_eq!(item.description, "Torowa");
/// ```
pub fn parse_item(raw: &str) -> ParsedItem {
    match raw.split_once('(') {
        Some((name, rest)) => {
            let rest = rest.trim();
            let description = rest.strip_suffix(')').unwrap_or(rest).trim();
            ParsedItem {
                name: name.trim().to_string(),
                description: description.to_string(),
            }
        }
        None => {
            let name = raw.trim().to_string();
            ParsedItem {
                description: name.clone(),
                name,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_with_description() {
        let item = parse_item("Mano (gavião)");
        assert_eq!(item.name, "Mano");
        assert_eq!(item.description, "gavião");
    }

    #[test]
    fn test_without_description() {
        let item = parse_item("  Kanao Kigadureu ");
        assert_eq!(item.name, "Kanao Kigadureu");
        assert_eq!(item.description, "Kanao Kigadureu");
    }

    #[test]
    fn test_multi_word_description() {
        let item = parse_item(
            "Keakorogu Ao Baru Kadureu (araçã de cabeça listrada da cor do céu)",
        );
        assert_eq!(item.name, "Keakorogu Ao Baru Kadureu");
        assert_eq!(item.description, "araçã de cabeça listrada da cor do céu");
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let item = parse_item("Okwa (lobinho");
        assert_eq!(item.name, "Okwa");
        assert_eq!(item.description, "lobinho");
    }

    #[test]
    fn test_only_one_trailing_paren_removed() {
        let item = parse_item("Ato (jabuti (grande))");
        assert_eq!(item.name, "Ato");
        assert_eq!(item.description, "jabuti (grande)");
    }

    #[test]
    fn test_inner_whitespace_trimmed() {
        let item = parse_item("Ki ( anta )");
        assert_eq!(item.description, "anta");
    }

    #[test]
    fn test_empty_name() {
        let item = parse_item("(ararapiranga)");
        assert_eq!(item.name, "");
        assert_eq!(item.description, "ararapiranga");
    }

    #[test]
    fn test_reassembles_to_raw() {
        for raw in [
            "Nabure (ararapiranga)",
            "Pogo (Anu branco)",
            "Ato (jabuti grande da mata)",
            "Bai kigadureu (casa branca)",
        ] {
            let item = parse_item(raw);
            let rebuilt = format!("{}({})", item.name, item.description);
            assert_eq!(strip_whitespace(&rebuilt), strip_whitespace(raw));
        }
    }
}
