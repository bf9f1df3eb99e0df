//! Shopping List Component
//!
//! Renders the selected items in insertion order.

use leptos::prelude::*;

use crate::components::ListRow;
use crate::store::{count_checked, use_shopping_store, ShoppingStateStoreFields};

#[component]
pub fn ShoppingList() -> impl IntoView {
    let store = use_shopping_store();

    // Keyed by position since duplicate names are allowed
    let rows = move || store.items().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="shopping-list">
            <For
                each=rows
                key=|(i, name)| (*i, name.clone())
                children=move |(_, name)| view! { <ListRow name=name /> }
            />
        </ul>

        <p class="item-count">
            {move || {
                let (total, done) = store.items().with(|items| {
                    (items.len(), store.checked().with(|map| count_checked(items, map)))
                });
                format!("{} items, {} checked", total, done)
            }}
        </p>
    }
}
