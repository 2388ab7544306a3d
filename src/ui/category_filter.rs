//! Category filter - dropdown that narrows which quotes can be shown

use crate::app::AppState;
use crate::store::lock_store;
use crate::types::ALL_CATEGORIES;
use dioxus::prelude::*;

/// Category selector: "All Categories" plus every category in the store
pub fn CategoryFilter() -> Element {
    let mut app_state = use_context::<AppState>();
    // Re-render when quotes are added, imported or synced
    let _ = app_state.revision.read();
    let categories = lock_store(&app_state.store).categories();
    let selected = app_state.selected_category.read().clone();

    rsx! {
        div {
            class: "row",
            label { class: "muted", r#for: "category-filter", "Filter" }
            select {
                id: "category-filter",
                value: "{selected}",
                onchange: move |evt: FormEvent| app_state.select_category(&evt.value()),
                option {
                    value: ALL_CATEGORIES,
                    selected: selected == ALL_CATEGORIES,
                    "All Categories"
                }
                for category in categories {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: selected == category,
                        "{category}"
                    }
                }
            }
        }
    }
}
