//! biosig-common — Shared error types used across the biosig crates.

pub mod error;

pub use error::{ApiError, BiosigError, Result};
