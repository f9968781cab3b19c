/// Passes that produce and post-process the game document
///
/// - `builder`: Turn clan records into clans and items
/// - `dedupe`: Find or drop items whose id was already emitted
/// - `validate`: Check that clans and item references are consistent
pub mod builder;
pub mod dedupe;
pub mod validate;

// Re-export commonly used functions
pub use builder::{build_game_data, build_item};
pub use dedupe::{dedupe_items, duplicate_item_ids};
pub use validate::{validate_clans, validate_game_data};
