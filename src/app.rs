//! Shopping List App
//!
//! Root component: loads the item pool once, then shows search and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ItemSearch, ShoppingList};
use crate::models::ViewState;
use crate::source;
use crate::store::ShoppingState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (view_state, set_view_state) = signal(ViewState::Loading);

    // Provide the list store to all children
    provide_context(Store::new(ShoppingState::new()));

    // Load the item pool on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = source::fetch_items().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[APP] Failed to load items: {}", e).into());
            }
            set_view_state.update(|state| state.resolve(result));
        });
    });

    move || match view_state.get() {
        ViewState::Loading => view! { <h1>"Loading"</h1> }.into_any(),
        ViewState::Error(_) => view! { <h1>"Error"</h1> }.into_any(),
        ViewState::Ready(pool) => view! {
            <div class="app">
                <header class="app-header">
                    <h2>"My Shopping List"</h2>
                    <ItemSearch pool=pool />
                    <ShoppingList />
                </header>
            </div>
        }.into_any(),
    }
}
