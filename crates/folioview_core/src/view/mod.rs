//! Portfolio view controller.
//!
//! # Responsibility
//! - Sequence startup: load the document, restore the theme, render.
//! - Own the interaction state for the lifetime of the page.
//!
//! # Invariants
//! - A failed document load halts initialization; only the error page
//!   exists in that state.
//! - The card index is rebuilt after every full render.

pub mod controller;
