//! Line-level lexical machinery.
//!
//! - [`patterns`]: every token regex, compiled once via `LazyLock`.
//! - [`escape`]: backslash-escape neutralization applied before matching.
//! - [`matcher`]: start/end token search over a scanned line, including the
//!   regex-literal heuristics.

pub mod escape;
pub mod matcher;
pub mod patterns;

pub use escape::neutralize_escapes;
pub use matcher::{find_end, find_start, search_any, EndMatch, StartMatch, TokenMatch};
