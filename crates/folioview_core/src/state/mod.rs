//! Interaction state and action dispatch.
//!
//! # Responsibility
//! - Own the transient UI selection state (active filter, menu flag)
//!   and the current theme.
//! - Turn named actions into surface effects via pure transition rules.
//!
//! # Invariants
//! - Exactly one filter button is active at any time.
//! - Selecting a filter always closes the mobile menu.
//! - Handlers never touch a rendering surface; they only emit effects.

pub mod interaction;
