//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and the filesystem.

pub mod config;
pub mod generation;
pub mod output;

// Re-export adapters
pub use config::XdgConfigStore;
pub use generation::GeminiGenerator;
pub use output::FileOutputSink;
