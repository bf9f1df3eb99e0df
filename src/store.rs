//! Shopping List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

/// Query text, selected items and their checked flags
#[derive(Clone, Debug, Default, Store)]
pub struct ShoppingState {
    /// Current text of the search input
    pub query: String,
    /// Selected items in insertion order, duplicates allowed
    pub items: Vec<String>,
    /// Checked flag per item name; missing means unchecked
    pub checked: HashMap<String, bool>,
}

impl ShoppingState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn flip_checked(checked: &mut HashMap<String, bool>, item: &str) {
    let flag = checked.entry(item.to_string()).or_insert(false);
    *flag = !*flag;
}

fn remove_all(items: &mut Vec<String>, item: &str) {
    items.retain(|i| i != item);
}

pub fn is_checked(checked: &HashMap<String, bool>, item: &str) -> bool {
    checked.get(item).copied().unwrap_or(false)
}

/// Rows of `items` whose name is checked
pub fn count_checked(items: &[String], checked: &HashMap<String, bool>) -> usize {
    items.iter().filter(|item| is_checked(checked, item)).count()
}

/// Type alias for the store
pub type ShoppingStore = Store<ShoppingState>;

/// Get the shopping store from context
pub fn use_shopping_store() -> ShoppingStore {
    expect_context::<ShoppingStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the query with the input's current value
pub fn store_set_query(store: &ShoppingStore, query: String) {
    store.query().set(query);
}

/// Add a suggestion to the list and reset the input
pub fn store_select(store: &ShoppingStore, item: String) {
    store.items().write().push(item);
    store.query().write().clear();
}

/// Flip the checked flag of an item
pub fn store_toggle_check(store: &ShoppingStore, item: &str) {
    flip_checked(&mut store.checked().write(), item);
}

/// Remove all rows with this name from the list
pub fn store_delete(store: &ShoppingStore, item: &str) {
    remove_all(&mut store.items().write(), item);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> (Owner, ShoppingStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(ShoppingState::new()))
    }

    #[test]
    fn test_set_query() {
        let (_owner, store) = setup_store();
        store_set_query(&store, "mi".to_string());
        assert_eq!(store.query().get_untracked(), "mi");
    }

    #[test]
    fn test_select_appends_and_clears_query() {
        let (_owner, store) = setup_store();
        store_set_query(&store, "mi".to_string());
        store_select(&store, "mint".to_string());

        assert_eq!(store.items().get_untracked(), vec!["mint"]);
        assert_eq!(store.query().get_untracked(), "");
    }

    #[test]
    fn test_select_allows_duplicates() {
        let (_owner, store) = setup_store();
        store_select(&store, "milk".to_string());
        store_select(&store, "mint".to_string());
        store_select(&store, "milk".to_string());

        assert_eq!(store.items().get_untracked(), vec!["milk", "mint", "milk"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (_owner, store) = setup_store();
        assert!(!is_checked(&store.checked().get_untracked(), "mint"));

        store_toggle_check(&store, "mint");
        assert_eq!(store.checked().get_untracked().get("mint"), Some(&true));

        store_toggle_check(&store, "mint");
        assert!(!is_checked(&store.checked().get_untracked(), "mint"));
    }

    #[test]
    fn test_delete_removes_every_occurrence() {
        let (_owner, store) = setup_store();
        store_select(&store, "milk".to_string());
        store_select(&store, "mint".to_string());
        store_select(&store, "milk".to_string());

        store_delete(&store, "milk");
        assert_eq!(store.items().get_untracked(), vec!["mint"]);

        // Unknown names are a no-op
        store_delete(&store, "bread");
        assert_eq!(store.items().get_untracked(), vec!["mint"]);
    }

    #[test]
    fn test_delete_keeps_checked_flag() {
        let (_owner, store) = setup_store();
        store_select(&store, "mint".to_string());
        store_toggle_check(&store, "mint");
        store_delete(&store, "mint");

        assert!(store.items().get_untracked().is_empty());
        assert!(is_checked(&store.checked().get_untracked(), "mint"));
    }

    #[test]
    fn test_count_checked() {
        let (_owner, store) = setup_store();
        store_select(&store, "milk".to_string());
        store_select(&store, "mint".to_string());
        store_select(&store, "milk".to_string());
        store_toggle_check(&store, "milk");

        let items = store.items().get_untracked();
        assert_eq!(count_checked(&items, &store.checked().get_untracked()), 2);
    }

    #[test]
    fn test_scenario() {
        let (_owner, store) = setup_store();
        store_set_query(&store, "mi".to_string());
        store_select(&store, "mint".to_string());
        assert_eq!(store.items().get_untracked(), vec!["mint"]);
        assert_eq!(store.query().get_untracked(), "");

        store_toggle_check(&store, "mint");
        assert_eq!(store.checked().get_untracked(), HashMap::from([("mint".to_string(), true)]));

        store_delete(&store, "mint");
        assert!(store.items().get_untracked().is_empty());
    }
}
