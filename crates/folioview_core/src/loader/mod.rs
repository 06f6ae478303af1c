//! Portfolio document loading.
//!
//! # Responsibility
//! - Issue the single document fetch (local path or http URL).
//! - Map transport, status, IO and parse failures into one error type.
//!
//! # Invariants
//! - Exactly one attempt per call: no retry, no backoff, no timeout.
//! - A failed load leaves the caller with nothing but the error; the
//!   view layer renders the error page and halts initialization.

pub mod fetch;
