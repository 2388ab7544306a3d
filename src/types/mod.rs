//! Shared type definitions
//!
//! Data types used by the store, the sync layer and the UI.

pub mod notice;
pub mod quote;

pub use notice::{Notice, NoticeKind};
pub use quote::{MergeResult, Quote, ALL_CATEGORIES, DEFAULT_REMOTE_CATEGORY};
