//! Stream-level reindentation pipeline.
//!
//! Reads an entire source from a buffered reader, runs the line scanner
//! over it with the rule table selected by [`Syntax`], and writes the
//! reindented text to any `Write` implementation. The scanner needs the
//! whole source up front because scope state carries across lines, so
//! this is a read-all, process, write-all pipeline rather than a
//! line-at-a-time one.

use std::io::{BufRead, Write};

use crate::config::{Config, Syntax};
use crate::format::{reindent_markup, reindent_script};
use crate::Result;

/// Reindent everything from `input` and write the result to `output`.
///
/// The indent unit is taken from `config` (spaces or a tab per level).
/// Output lines are always `\r\n`-terminated regardless of the input's
/// line endings.
pub fn reindent_stream<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &Config,
    syntax: Syntax,
) -> Result<()> {
    let mut source = String::new();
    let mut reader = input;
    reader.read_to_string(&mut source)?;

    let unit = config.indent_unit();
    let formatted = match syntax {
        Syntax::Script => reindent_script(&source, &unit),
        Syntax::Markup => reindent_markup(&source, &unit),
    };

    output.write_all(formatted.as_bytes())?;
    Ok(())
}
