//! Pure markup rendering.
//!
//! # Responsibility
//! - Map (document, selection state, theme) to markup strings.
//! - Keep all surface mutation out of this crate; callers inject the
//!   returned fragments into their containers.
//!
//! # Invariants
//! - Rendering is a pure function of its inputs; no I/O, no logging.
//! - Every interpolated document value is HTML-escaped.
//! - An absent document section yields an empty fragment, never an
//!   error.

pub mod fragments;
