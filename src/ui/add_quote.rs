//! Add form - new quote text and category

use crate::app::AppState;
use dioxus::prelude::*;

/// Store the typed quote and clear the inputs when it was accepted
fn submit(app_state: &mut AppState, mut text: Signal<String>, mut category: Signal<String>) {
    if app_state.add_quote(&text(), &category()) {
        text.set(String::new());
        category.set(String::new());
    }
}

pub fn AddQuoteForm() -> Element {
    let mut app_state_click = use_context::<AppState>();
    let mut app_state_enter = app_state_click.clone();
    let mut text = use_signal(String::new);
    let mut category = use_signal(String::new);

    rsx! {
        div {
            class: "card",
            h3 { style: "margin-top: 0;", "Add a Quote" }
            div {
                class: "row",
                style: "flex-direction: column; align-items: stretch;",
                input {
                    r#type: "text",
                    placeholder: "Enter a new quote",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Enter quote category",
                    value: "{category}",
                    oninput: move |evt| category.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit(&mut app_state_enter, text, category);
                        }
                    },
                }
                button {
                    onclick: move |_| submit(&mut app_state_click, text, category),
                    "Add Quote"
                }
            }
        }
    }
}
