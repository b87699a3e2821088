//! Collate Server Library
//!
//! A local document comparison server: paste or upload two text/JSON/XML
//! documents, pretty-print them, and compare them line by line with
//! character-level highlighting. Comparisons can be shared through
//! short-lived "magic links" backed by an in-memory TTL cache.
//!
//! The main server binary is in main.rs.
//!
//! # Modules
//!
//! - `compare`: line diff engine, highlight, normalizers, orchestration
//! - `format`: JSON/XML pretty-printers and the comparison mode enum
//! - `share`: magic-link payloads and the TTL-bounded share store
//! - `render`: HTML page rendering
//! - `routes`: HTTP endpoints

pub mod compare;
pub mod config;
pub mod digest;
pub mod error;
pub mod format;
pub mod render;
pub mod routes;
pub mod share;
pub mod state;

pub use config::Config;
pub use error::{AppError, Side};
pub use state::AppState;
