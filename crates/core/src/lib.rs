//! Shared domain types for the AWFM questionnaire backend.
//!
//! Holds the vocabulary every other crate agrees on: database ID and
//! timestamp aliases, the domain error enum, and the checkpoint stage
//! tags with their key conventions.

pub mod error;
pub mod stage;
pub mod types;
