//! Persisted user preferences.
//!
//! # Responsibility
//! - Store and restore the theme selection across sessions.
//!
//! # Invariants
//! - Exactly one preference key exists today (`theme`).
//! - Writes are last-write-wins and immediately visible to subsequent
//!   reads in the same process.

pub mod theme_store;
