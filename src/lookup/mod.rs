/// Fixed lookup tables applied to every generated item
///
/// - `colors`: clan display name to hex color
/// - `icons`: lowercased item description to emoji
pub mod colors;
pub mod icons;

// Re-export commonly used functions
pub use colors::{clan_color, DEFAULT_COLOR};
pub use icons::{item_icon, DEFAULT_ICON};
