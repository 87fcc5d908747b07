//! TubeScribe - turn a YouTube video into text with Google Gemini
//!
//! Sends a prompt template and a video URL file reference to the Gemini
//! `generateContent` endpoint and pulls the generated text out of the reply.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Prompt types and templates, the response extractor, value objects, errors
//! - **Application**: The analyze use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, output files, config file)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
