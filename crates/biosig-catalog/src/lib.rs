//! biosig-catalog — The compiled-in biosignature records and the
//! selection pipeline that filters them for display.

pub mod entities;
pub mod dataset;
pub mod catalog;
pub mod selection;

// Re-export commonly used types
pub use catalog::Catalog;
pub use entities::Biosignature;
pub use selection::{select, DisplayRow, Selection, SelectionCriteria};
