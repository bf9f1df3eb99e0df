//! UI Components
//!
//! Leptos components of the shopping list view.

mod item_search;
mod list_row;
mod shopping_list;

pub use item_search::ItemSearch;
pub use list_row::ListRow;
pub use shopping_list::ShoppingList;
