/// Rule tables for the lexical-scope scanner
///
/// Each [`Rule`] describes one lexical construct: where it starts, where it
/// ends, and how it affects scanning. Declaration order is significant — when
/// two rules could start at the same position, the first-declared rule wins.
///
/// The tables are plain data built by constructor functions and passed into
/// the scanner; nothing here is mutated at runtime.
use regex::Regex;

use crate::parser::matcher::{regex_literal_end, regex_literal_start, TokenMatch};
use crate::parser::patterns::{
    BACKTICK_RE, BLOCK_COMMENT_CLOSE_RE, BLOCK_COMMENT_OPEN_RE, BREAK_KW_RE, CASE_HEAD_RE,
    DEFAULT_HEAD_RE, DOCTYPE_OPEN_RE, DOUBLE_QUOTE_RE, ELSE_KW_RE, FOR_HEAD_RE, IF_HEAD_RE,
    IF_KW_RE, IF_MID_RE, LBRACE_RE, LBRACKET_RE, LINE_COMMENT_OPEN_RE, LPAREN_RE,
    MARKUP_COMMENT_CLOSE_RE, MARKUP_COMMENT_OPEN_RE, NEWLINE_RE, RBRACE_RE, RBRACKET_RE,
    RPAREN_RE, SELF_CLOSE_RE, SEMICOLON_RE, SINGLE_QUOTE_RE, TAG_CLOSE_RE, TAG_FRAGMENT_RE,
    TAG_OPEN_RE, VAR_KW_RE,
};

/// A start or end token matcher.
///
/// Either a fixed pattern, or a predicate for context-sensitive constructs
/// (telling a regex literal apart from division, locating an unescaped regex
/// terminator). The predicate receives the remaining text and the owning
/// rule.
pub enum Matcher {
    Pattern(&'static Regex),
    Predicate(fn(&str, &Rule) -> Option<TokenMatch>),
}

/// One lexical construct in a rule table.
pub struct Rule {
    pub name: &'static str,
    /// Start matchers, tried in order; first match wins
    pub start: Vec<Matcher>,
    /// End matchers, consulted only while this rule is innermost
    pub end: Vec<Matcher>,
    /// While open and unterminated on a line, that line is passed through
    /// without reindentation (comments, strings, regex literals)
    pub ignore: bool,
    /// Whether nesting inside this rule adds an indentation level
    pub indent: bool,
    /// Whether the cursor moves past the end token (vs. stopping at it so
    /// the terminator can be re-scanned as a potential new start)
    pub advance: bool,
}

/// Rule table for JavaScript- and CSS-like sources.
///
/// Order matters: the comment rules shield `//` and `/*` from the regex
/// heuristic, the strings shield everything inside quotes, and the keyword
/// rules come before the bare delimiters they share characters with.
#[must_use]
pub fn build_script_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "line comment",
            start: vec![Matcher::Pattern(&LINE_COMMENT_OPEN_RE)],
            end: vec![Matcher::Pattern(&NEWLINE_RE)],
            ignore: true,
            indent: false,
            advance: false,
        },
        Rule {
            name: "block comment",
            start: vec![Matcher::Pattern(&BLOCK_COMMENT_OPEN_RE)],
            end: vec![Matcher::Pattern(&BLOCK_COMMENT_CLOSE_RE)],
            ignore: true,
            indent: false,
            advance: false,
        },
        Rule {
            name: "regex",
            start: vec![Matcher::Predicate(regex_literal_start)],
            end: vec![Matcher::Predicate(regex_literal_end)],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "double-quoted string",
            start: vec![Matcher::Pattern(&DOUBLE_QUOTE_RE)],
            end: vec![
                Matcher::Pattern(&DOUBLE_QUOTE_RE),
                Matcher::Pattern(&NEWLINE_RE),
            ],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "single-quoted string",
            start: vec![Matcher::Pattern(&SINGLE_QUOTE_RE)],
            end: vec![
                Matcher::Pattern(&SINGLE_QUOTE_RE),
                Matcher::Pattern(&NEWLINE_RE),
            ],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "template string",
            start: vec![Matcher::Pattern(&BACKTICK_RE)],
            end: vec![Matcher::Pattern(&BACKTICK_RE)],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "if",
            start: vec![Matcher::Pattern(&IF_HEAD_RE), Matcher::Pattern(&IF_MID_RE)],
            end: vec![
                Matcher::Pattern(&ELSE_KW_RE),
                Matcher::Pattern(&LBRACE_RE),
                Matcher::Pattern(&SEMICOLON_RE),
                Matcher::Pattern(&NEWLINE_RE),
            ],
            ignore: false,
            indent: true,
            advance: false,
        },
        Rule {
            name: "for",
            start: vec![Matcher::Pattern(&FOR_HEAD_RE)],
            end: vec![
                Matcher::Pattern(&LBRACE_RE),
                Matcher::Pattern(&SEMICOLON_RE),
                Matcher::Pattern(&NEWLINE_RE),
            ],
            ignore: false,
            indent: true,
            advance: false,
        },
        Rule {
            name: "else",
            start: vec![Matcher::Pattern(&ELSE_KW_RE)],
            end: vec![
                Matcher::Pattern(&IF_KW_RE),
                Matcher::Pattern(&LBRACE_RE),
                Matcher::Pattern(&SEMICOLON_RE),
                Matcher::Pattern(&NEWLINE_RE),
            ],
            ignore: false,
            indent: true,
            advance: false,
        },
        Rule {
            name: "bracket",
            start: vec![Matcher::Pattern(&LPAREN_RE)],
            end: vec![Matcher::Pattern(&RPAREN_RE)],
            ignore: false,
            indent: true,
            advance: true,
        },
        Rule {
            name: "array",
            start: vec![Matcher::Pattern(&LBRACKET_RE)],
            end: vec![Matcher::Pattern(&RBRACKET_RE)],
            ignore: false,
            indent: true,
            advance: true,
        },
        Rule {
            name: "block",
            start: vec![Matcher::Pattern(&LBRACE_RE)],
            end: vec![Matcher::Pattern(&RBRACE_RE)],
            ignore: false,
            indent: true,
            advance: true,
        },
        Rule {
            name: "var",
            start: vec![Matcher::Pattern(&VAR_KW_RE)],
            end: vec![Matcher::Pattern(&SEMICOLON_RE)],
            ignore: false,
            indent: true,
            advance: false,
        },
        Rule {
            name: "case",
            start: vec![Matcher::Pattern(&CASE_HEAD_RE)],
            end: vec![
                Matcher::Pattern(&BREAK_KW_RE),
                Matcher::Pattern(&CASE_HEAD_RE),
                Matcher::Pattern(&DEFAULT_HEAD_RE),
                Matcher::Pattern(&RBRACE_RE),
            ],
            ignore: false,
            indent: true,
            advance: false,
        },
    ]
}

/// Rule table for HTML-like sources: tag rules plus the full script table,
/// so embedded scripts and styles keep indenting correctly.
#[must_use]
pub fn build_markup_rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule {
            name: "comment",
            start: vec![Matcher::Pattern(&MARKUP_COMMENT_OPEN_RE)],
            end: vec![Matcher::Pattern(&MARKUP_COMMENT_CLOSE_RE)],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "doctype",
            start: vec![Matcher::Pattern(&DOCTYPE_OPEN_RE)],
            end: vec![Matcher::Pattern(&NEWLINE_RE)],
            ignore: true,
            indent: false,
            advance: true,
        },
        Rule {
            name: "tag",
            start: vec![Matcher::Pattern(&TAG_OPEN_RE)],
            end: vec![Matcher::Pattern(&TAG_CLOSE_RE)],
            ignore: false,
            indent: true,
            advance: true,
        },
        Rule {
            name: "open tag",
            start: vec![Matcher::Pattern(&TAG_FRAGMENT_RE)],
            end: vec![Matcher::Pattern(&SELF_CLOSE_RE)],
            ignore: false,
            indent: false,
            advance: true,
        },
    ];
    rules.extend(build_script_rules());
    rules
}
