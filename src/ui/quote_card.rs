//! Quote display - current quote, its category and the "new quote" button

use crate::app::AppState;
use dioxus::prelude::*;

pub fn QuoteCard() -> Element {
    let mut app_state = use_context::<AppState>();
    let current = app_state.current_quote.read().clone();

    rsx! {
        div {
            class: "card",

            match current {
                Some(quote) => {
                    let text = quote.text;
                    let category = quote.category;
                    rsx! {
                        p { class: "quote-text", "“{text}”" }
                        span { class: "quote-category", "Category: {category}" }
                    }
                }
                None => rsx! {
                    p { class: "muted", "No quotes available for this category." }
                },
            }

            div {
                class: "row",
                style: "margin-top: 16px;",
                button {
                    onclick: move |_| app_state.show_new_quote(),
                    "Show New Quote"
                }
            }
        }
    }
}
