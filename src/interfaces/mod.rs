//! Adapters that move amounts and their spellings in and out of the process.

pub mod csv;
pub mod output;
