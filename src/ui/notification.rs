//! Notice banner - transient info and error messages

use crate::app::AppState;
use dioxus::prelude::*;

/// Banner for the current notice, if any
pub fn NoticeBanner() -> Element {
    let app_state = use_context::<AppState>();
    let Some(notice) = app_state.notice.read().clone() else {
        return rsx! {};
    };

    let class = if notice.is_error() { "notice error" } else { "notice" };
    let text = notice.text;

    rsx! {
        div { class: "{class}", "{text}" }
    }
}
