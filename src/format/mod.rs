//! The line scanner and the public reindent operations.
//!
//! [`reindent_script`] and [`reindent_markup`] are the two entry points:
//! both take the full source text and an indent unit, and return the text
//! with corrected leading indentation and `\r\n`-normalized line endings.
//! [`reindent`] is the table-generic core they share.

pub mod indenter;

pub use indenter::{reindent, reindent_markup, reindent_script};
