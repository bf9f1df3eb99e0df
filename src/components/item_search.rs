//! Item Search Component
//!
//! Query input with a prefix-filtered dropdown of pool items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filter::filter_items;
use crate::models::ItemPool;
use crate::store::{store_select, store_set_query, use_shopping_store, ShoppingStateStoreFields};

/// Highlight index after an arrow key, clamped to the suggestion count
fn step_highlight(current: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    }
}

/// Search input with suggestions
///
/// Props:
/// - pool: all fetched items to match against
#[component]
pub fn ItemSearch(pool: ItemPool) -> impl IntoView {
    let store = use_shopping_store();
    let (highlighted, set_highlighted) = signal(0usize);

    // Derived on every keystroke, never cached
    let suggestions = Memo::new(move |_| filter_items(pool.items(), &store.query().get()));

    let select = move |name: String| {
        web_sys::console::log_1(&format!("[SEARCH] Selected {}", name).into());
        store_select(&store, name);
        set_highlighted.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions.get();

        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_highlighted.update(|i| *i = step_highlight(*i, sugg.len(), true));
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_highlighted.update(|i| *i = step_highlight(*i, sugg.len(), false));
            }
            "Enter" => {
                if let Some(name) = sugg.get(highlighted.get()) {
                    ev.prevent_default();
                    select(name.clone());
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="search">
            <input
                type="text"
                placeholder="Search food..."
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=move |ev| {
                    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                        return;
                    };
                    store_set_query(&store, input.value());
                    set_highlighted.set(0);
                }
                on:keydown=on_keydown
            />

            {move || {
                let sugg = suggestions.get();
                if sugg.is_empty() {
                    return None;
                }
                let selected = highlighted.get();
                Some(view! {
                    <ul class="dropdown">
                        {sugg.into_iter().enumerate().map(move |(i, name)| {
                            let name_for_click = name.clone();
                            view! {
                                <li
                                    class=if i == selected { "dropdown-item selected" } else { "dropdown-item" }
                                    on:click=move |_| select(name_for_click.clone())
                                >
                                    {name}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                })
            }}
        </div>
    }
}
