//! Diagnostics produced while parsing.
//!
//! This module defines:
//!
//! - `Error`, a diagnostic carrying its source position
//! - `ErrorImpl`, the variants the parser can record
//! - `ErrorTip`, an optional hint shown when rendering

pub mod errors;

#[cfg(test)]
mod tests;
