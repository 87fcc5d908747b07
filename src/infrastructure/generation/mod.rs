//! Generative-language service adapters

mod gemini;

pub use gemini::GeminiGenerator;
