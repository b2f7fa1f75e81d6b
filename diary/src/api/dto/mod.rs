//! Wire types for the diary REST API, kept apart from the domain models in
//! `src/models/`.

pub mod diary;

pub use diary::*;
