//! Output sink adapters

mod file_sink;

pub use file_sink::FileOutputSink;
