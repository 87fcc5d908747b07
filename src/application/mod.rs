//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod analyze;
pub mod ports;

// Re-export use cases
pub use analyze::{AnalyzeCallbacks, AnalyzeError, AnalyzeInput, AnalyzeOutput, AnalyzeVideoUseCase};
