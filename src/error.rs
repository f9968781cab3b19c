use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameDataError {
    #[error("Item {item_id} references unknown clan {clan_id}")]
    DanglingClanReference { item_id: String, clan_id: String },

    #[error("Clan id {0} appears more than once")]
    DuplicateClanId(String),

    #[error("Clan {clan_name:?} has an empty clan_id")]
    EmptyClanId { clan_name: String },

    #[error("Invalid clan table: {0}")]
    InvalidTable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameDataError>;
