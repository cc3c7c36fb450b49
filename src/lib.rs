//! reindent - Leading-indentation corrector for script and markup sources
//!
//! Rewrites the leading whitespace of each line in JavaScript/CSS-like and
//! HTML-like text so it reflects the nesting structure, leaving the trimmed
//! content of every line untouched.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;
pub mod scope;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::{Config, Syntax};
pub use error::Result;
pub use format::{reindent_markup, reindent_script};
