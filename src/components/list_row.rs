//! List Row Component
//!
//! One selected item with its check toggle and delete button.

use leptos::prelude::*;

use crate::store::{is_checked, store_delete, store_toggle_check, use_shopping_store, ShoppingStateStoreFields};

/// Glyph shown on the toggle button
pub fn check_glyph(checked: bool) -> &'static str {
    if checked { "✓" } else { "○" }
}

/// A single row in the shopping list
#[component]
pub fn ListRow(name: String) -> impl IntoView {
    let store = use_shopping_store();

    let key = name.clone();
    let checked = Memo::new(move |_| store.checked().with(|map| is_checked(map, &key)));

    let toggle_name = name.clone();
    let delete_name = name.clone();

    view! {
        <li class=move || if checked.get() { "list-row checked" } else { "list-row" }>
            <button
                class="check-btn"
                on:click=move |_| store_toggle_check(&store, &toggle_name)
            >
                {move || check_glyph(checked.get())}
            </button>

            <span class="item-text">{name}</span>

            <button
                class="delete-btn"
                on:click=move |_| store_delete(&store, &delete_name)
            >
                "x"
            </button>
        </li>
    }
}
