//! Application layer exposing the monetary formatter.
//!
//! `spell_dollars_and_cents` is the primary entry point. `DollarsAndCents`
//! implements the `Speller` port for callers that hold the formatter behind a
//! trait object.

pub mod formatter;
