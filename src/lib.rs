//! QuoteBox Library
//!
//! Core library for the QuoteBox desktop widget: a persisted quote
//! collection, remote reconciliation and the Dioxus UI on top.

pub mod app;
pub mod storage;
pub mod store;
pub mod sync;
pub mod types;
pub mod ui;
