//! Lexical construct rules and nesting bookkeeping.
//!
//! This module provides the declarative side of the scanner:
//! - [`Rule`] and [`Matcher`] describe one lexical construct each: comments,
//!   strings, regex literals, brackets, brace blocks, dangling-brace
//!   keywords, `var` declarations, `case` clauses, markup tags.
//! - [`build_script_rules`] / [`build_markup_rules`] assemble the two rule
//!   tables; the markup table extends the script table.
//! - [`ScopeTracker`] keeps the active rule stack and the per-line indent
//!   buffer the scanner derives output indentation from.

pub mod rules;
pub mod tracker;

pub use rules::{build_markup_rules, build_script_rules, Matcher, Rule};
pub use tracker::ScopeTracker;
