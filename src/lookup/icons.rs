/// Icon used for descriptions missing from the table
pub const DEFAULT_ICON: &str = "✨";

/// Lowercased item description to emoji glyph
const ITEM_ICONS: &[(&str, &str)] = &[
    ("onça pintada", "🐆"),
    ("anta", "🫎"),
    ("arara amarelo", "🦜"),
    ("paca", "🐀"),
    ("jabuti", "🐢"),
    ("cobra coral", "🐍"),
    ("tatu canastra", "🦔"),
    ("dourado", "🐟"),
    ("ararapiranga", "🦜"),
    ("pato", "🦆"),
    ("bugio preto", "🐒"),
    ("queixada", "🐗"),
    ("coruja", "🦉"),
    ("pintado", "🐠"),
    ("piranha", "🐟"),
    ("urubu", "🦅"),
    ("gavião", "🦅"),
    ("lobo", "🐺"),
    ("papagaio verdadeiro", "🦜"),
    ("macaco barriga", "🐒"),
    ("lontra", "🦦"),
    ("beija flor", "🐦"),
    ("jacaré", "🐊"),
    ("raposa", "🦊"),
    ("sucuri", "🐍"),
    ("ema", "🦤"),
    ("tucano", "🐦"),
    ("capivara", "🦫"),
    ("caititu", "🐖"),
    ("tamanduá bandeira", "🐜"),
];

/// Resolve the icon of an item by its description
///
/// The description is lowercased before lookup and must otherwise match
/// a table entry exactly.
///
/// # Examples
/// ```
/// use bororo_clans::lookup::item_icon;
///
/// assert_eq!(item_icon("Dourado"), "🐟");
/// assert_eq!(item_icon("gavião real"), "✨");
/// ```
pub fn item_icon(description: &str) -> &'static str {
    let key = description.to_lowercase();
    ITEM_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
