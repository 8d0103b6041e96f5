//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum_macros`).
//! Keep it lean: no I/O, process spawning, or heavy logic. Just the scaffolder settings,
//! the generated documents, and the file layout they share.

pub mod config;
pub mod constants;
pub mod documents;
