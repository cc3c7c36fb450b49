//! Stream processing front end.
//!
//! The main entry point is [`reindent_stream`], which reads a whole source
//! from a buffered reader, selects the rule table for the configured
//! syntax, and writes the reindented text to any `Write` implementation.

pub mod pipeline;

pub use pipeline::reindent_stream;
