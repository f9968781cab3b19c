pub mod item;
pub mod slug;

// Re-export commonly used items
pub use item::parse_item;
pub use slug::slugify;
