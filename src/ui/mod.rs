//! UI components for QuoteBox
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod add_quote;
pub mod category_filter;
pub mod notification;
pub mod quote_card;
pub mod transfer;

use crate::ui::add_quote::AddQuoteForm;
use crate::ui::category_filter::CategoryFilter;
use crate::ui::notification::NoticeBanner;
use crate::ui::quote_card::QuoteCard;
use crate::ui::transfer::TransferPanel;
use dioxus::prelude::*;

/// Stylesheet injected into the window head
pub const STYLE: &str = r#"
:root {
    --bg: #1c1b1a;
    --card: #262523;
    --border: #3a3835;
    --text-primary: #f2ede7;
    --text-secondary: #b8b1a8;
    --accent: #2a6b7c;
    --error: #b5483b;
    --notice: #c9a227;
}
body { margin: 0; background: var(--bg); color: var(--text-primary); font-family: system-ui, sans-serif; }
.layout { max-width: 560px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 16px; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 20px; }
.quote-text { font-size: 1.25rem; line-height: 1.5; margin: 0 0 8px 0; }
.quote-category { color: var(--text-secondary); font-size: 0.85rem; }
.row { display: flex; gap: 8px; align-items: center; }
input, select { flex: 1; background: var(--bg); color: var(--text-primary); border: 1px solid var(--border); border-radius: 8px; padding: 8px 10px; }
button { background: var(--accent); color: var(--text-primary); border: none; border-radius: 8px; padding: 8px 14px; cursor: pointer; }
button:hover { opacity: 0.9; }
.notice { border-radius: 8px; padding: 10px; color: #1c1b1a; background: var(--notice); }
.notice.error { background: var(--error); color: var(--text-primary); }
.muted { color: var(--text-secondary); }
"#;

pub fn Layout() -> Element {
    rsx! {
        div {
            class: "layout",
            NoticeBanner {}
            h1 { "Quote of the Day" }
            CategoryFilter {}
            QuoteCard {}
            AddQuoteForm {}
            TransferPanel {}
        }
    }
}
