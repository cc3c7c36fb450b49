/// Escape neutralization pre-pass
///
/// Before a line is matched against the rule tables, every backslash escape
/// sequence is replaced with a neutral `0` so that an escaped quote or slash
/// inside a string or regex literal never triggers a start or end token.
/// Matching operates entirely on the neutralized text; the emitted output
/// always comes from the original line.
use std::borrow::Cow;

use crate::parser::patterns::ESCAPE_RE;

/// Replace every escape sequence in `line` with `0`.
///
/// Returns a borrowed `Cow` when the line contains no escapes, which is the
/// common case.
#[must_use]
pub fn neutralize_escapes(line: &str) -> Cow<'_, str> {
    ESCAPE_RE.replace_all(line, "0")
}
