//! Read-only domain model for the portfolio document.
//!
//! # Responsibility
//! - Define the canonical structures parsed from the portfolio JSON.
//! - Keep filtering semantics (`"all"` sentinel, category matching) on
//!   the model itself so renderer and state machine share one predicate.
//!
//! # Invariants
//! - Document data is never mutated after load; callers hold it by
//!   shared reference.
//! - Absent top-level sections are represented as `None`, never as an
//!   error.

pub mod document;
