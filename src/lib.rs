//! # bororo-clans
//!
//! Generates the data file of the Bororo clan matching game: every clan of
//! the ethnographic table and every totem item, with the clan it belongs
//! to, its display color and an icon.
//!
//! ## Example
//!
//! ```no_run
//! use bororo_clans::output::{write_game_data, DEFAULT_OUTPUT_PATH};
//! use std::path::Path;
//!
//! let data = bororo_clans::generate();
//! println!("{} clans, {} items", data.clans.len(), data.items.len());
//!
//! write_game_data(&data, Path::new(DEFAULT_OUTPUT_PATH), false).unwrap();
//! ```

pub mod error;
pub mod lookup;
pub mod output;
pub mod parser;
pub mod table;
pub mod transform;
pub mod types;

// Re-export commonly used items
pub use error::{GameDataError, Result};
pub use output::to_json_string;
pub use types::{ClanRecord, GameData, OutputClan, OutputItem};

/// Post-processing applied by [`generate_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Validate clan ids and item references
    pub check: bool,
    /// Drop items whose id was already emitted
    pub dedupe: bool,
}

/// Build the game document from the embedded clan table
///
/// # Examples
/// ```
/// let data = bororo_clans::generate();
/// assert_eq!(data.clans.len(), 9);
/// assert_eq!(data.items[0].id, "item_ararapiranga_boe_etuiedagamage");
/// ```
pub fn generate() -> GameData {
    transform::build_game_data(&table::embedded_clans())
}

/// Build the game document from the given clan records
pub fn generate_from(clans: &[ClanRecord]) -> GameData {
    transform::build_game_data(clans)
}

/// Build the game document with optional validation and deduplication
///
/// Validation runs on the records before building and on the finished
/// document; deduplication happens in between.
pub fn generate_with(clans: &[ClanRecord], options: GenerateOptions) -> Result<GameData> {
    if options.check {
        transform::validate_clans(clans)?;
    }

    let mut data = transform::build_game_data(clans);

    if options.dedupe {
        transform::dedupe_items(&mut data);
    }

    if options.check {
        transform::validate_game_data(&data)?;
    }

    Ok(data)
}
