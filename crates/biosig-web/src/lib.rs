//! biosig-web — Web GUI for the Space Biosignatures Reference.
//! Provides:
//!   - The filterable biosignature table with detail panels
//!   - A live-update results fragment
//!   - A small JSON API over the same selection pipeline

pub mod config;
pub mod router;
pub mod handlers;
pub mod render;
pub mod state;
