pub mod clans;
pub mod loader;

// Re-export commonly used items
pub use clans::embedded_clans;
pub use loader::{load_table, load_table_file};
