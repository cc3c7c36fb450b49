/// Token regexes for the script/style and markup rule tables
///
/// All patterns are compiled once at startup using `LazyLock`.
///
/// Patterns are matched against a slice of the line starting at the scan
/// cursor, so `^` anchors at the cursor position, not at column 0. Where the
/// original construct is "keyword followed by `(`", the keyword is wrapped in
/// capture group 1 so the matcher can report a match length that stops short
/// of the parenthesis.
use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are compile-time constants that are verified by tests.
/// The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid token pattern: {pattern}"))
}

// ===== LINE STRUCTURE =====

// Scanned lines are trimmed and re-terminated with \r\n, so an end-of-line
// token is always present for rules that terminate at the line break.
pub static NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\r*\n"));

// ===== COMMENTS =====

pub static LINE_COMMENT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"//"));
pub static BLOCK_COMMENT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"/\*"));
pub static BLOCK_COMMENT_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\*/"));

// ===== STRINGS =====

pub static DOUBLE_QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r#"""#));
pub static SINGLE_QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"'"));
pub static BACKTICK_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"`"));

// ===== REGEX LITERAL CONTEXT =====

// A `/` can only open a regex literal where a division operator cannot
// appear: right after one of ( , = : [ ! & | ? { } ; or at the start of the
// remaining line. The `[^/]` rejects `//`, which is a line comment.
pub static REGEX_PRELUDE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"[(,=:\[!&|?{};]\s*/[^/]|^\s*/[^/]"));

// ===== DANGLING-BRACE KEYWORDS =====

pub static IF_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^(if\s*)\("));
pub static IF_MID_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"(\s+if\s*)\("));
pub static FOR_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^(for\s*)\("));
pub static ELSE_KW_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"else\s+"));
pub static IF_KW_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"if"));

// ===== DELIMITERS =====

pub static LPAREN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\("));
pub static RPAREN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\)"));
pub static LBRACKET_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\["));
pub static RBRACKET_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\]"));
pub static LBRACE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\{"));
pub static RBRACE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\}"));
pub static SEMICOLON_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r";"));

// ===== DECLARATIONS AND CASE CLAUSES =====

pub static VAR_KW_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"var\s+"));
pub static CASE_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^case\s+"));
pub static DEFAULT_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^default\s+"));
pub static BREAK_KW_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"break[\s;]+"));

// ===== MARKUP =====

pub static MARKUP_COMMENT_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"<!--"));
pub static MARKUP_COMMENT_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"-->"));
pub static DOCTYPE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"<!"));

// A complete tag on one line, quotes shielding any > inside attributes.
pub static TAG_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r#"<("[^"]*"|'[^']*'|[^'">])*>"#));
pub static TAG_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"</[^>]+>"));

// A tag whose > has not appeared yet (spans lines); closed by />.
pub static TAG_FRAGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r#"<("[^"]*"|'[^']*'|[^'">])*"#));
pub static SELF_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"/>"));

// ===== ESCAPE NEUTRALIZATION =====

// \uXXXX, \u{...}, \xXX and single-character escapes. Replaced with a
// neutral character before matching so escaped quotes and slashes never
// trigger a token.
pub static ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"\\(u[0-9A-Fa-f]{4}|u\{[0-9A-Fa-f]{1,6}\}|x[0-9A-Fa-f]{2}|.)"));
