//! Generation response domain module

mod extract;

pub use extract::{extract, ExtractionError, ExtractionStep};
