//! Weather diary service: date-stamped diary entries enriched with the day's
//! weather, served over a small REST API backed by libSQL.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod weather;
