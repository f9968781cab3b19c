/// Characters dropped from a slug after lowercasing
const STRIPPED_CHARS: [char; 4] = ['(', ')', '/', ','];

/// Turn a display string into an identifier fragment
///
/// Lowercases the input, replaces each space with an underscore and drops
/// parentheses, slashes and commas. Repeated underscores are kept and
/// accented characters pass through unchanged.
///
/// # Arguments
/// * `text` - Display string, usually an item description
///
/// # Returns
/// * The slug, possibly empty
///
/// # Examples
/// ```
/// use bororo_clans::parser::slugify;
///
/// assert_eq!(slugify("Gavião Fumaça"), "gavião_fumaça");
/// assert_eq!(slugify("bugio (preto), macho/fêmea"), "bugio_preto_machofêmea");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}
