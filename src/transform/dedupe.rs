use crate::types::GameData;
use std::collections::{HashMap, HashSet};

/// Item ids that occur more than once, in the order they first repeat
///
/// Identical descriptions within one clan produce identical ids; this
/// reports them without changing the document.
pub fn duplicate_item_ids(data: &GameData) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for item in &data.items {
        let count = counts.entry(item.id.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(item.id.clone());
        }
    }

    order
}

/// Drop every item whose id was already emitted, keeping the first
///
/// # Returns
/// * Number of items removed
pub fn dedupe_items(data: &mut GameData) -> usize {
    let before = data.items.len();
    let mut seen = HashSet::new();
    data.items.retain(|item| seen.insert(item.id.clone()));
    before - data.items.len()
}
