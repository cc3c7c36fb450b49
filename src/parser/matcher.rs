/// Token matching over a single scanned line
///
/// Two questions are answered here: which rule could start next, and where
/// the currently innermost open rule ends. Both are built on [`search_any`],
/// which walks an ordered matcher list and takes the first matcher that
/// matches anywhere in the remaining text.
use regex::Regex;

use crate::parser::patterns::REGEX_PRELUDE_RE;
use crate::scope::{Matcher, Rule};

/// A single token match: byte offset and length within the scanned slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    pub index: usize,
    pub len: usize,
}

/// Result of scanning for the next rule start.
#[derive(Debug, Clone, Copy)]
pub struct StartMatch {
    /// Index of the winning rule in the rule table
    pub rule: usize,
    /// Absolute byte offset of the match in the scanned line
    pub index: usize,
    /// Cursor position after the match
    pub cursor: usize,
}

/// Result of scanning for the innermost rule's end token.
#[derive(Debug, Clone, Copy)]
pub struct EndMatch {
    /// Absolute byte offset of the match in the scanned line
    pub index: usize,
    /// Cursor position: past the match if the rule advances, at the match
    /// otherwise (so the terminator can be re-scanned as a new start)
    pub cursor: usize,
}

/// Try an ordered matcher list against `text`; the first matcher that
/// matches anywhere wins. Not earliest-across-matchers: a later matcher is
/// only consulted when every earlier one failed.
pub fn search_any(text: &str, matchers: &[Matcher], rule: &Rule) -> Option<TokenMatch> {
    for matcher in matchers {
        match matcher {
            Matcher::Pattern(re) => {
                if let Some(caps) = re.captures(text) {
                    // Group 0 is the whole match and always present
                    let whole = caps.get(0).expect("regex match has group 0");
                    let len = caps.get(1).map_or(whole.len(), |g| g.len());
                    return Some(TokenMatch {
                        index: whole.start(),
                        len,
                    });
                }
            }
            Matcher::Predicate(f) => {
                if let Some(m) = f(text, rule) {
                    return Some(m);
                }
            }
        }
    }
    None
}

/// Scan `text` from `from` against every rule's start matchers and return
/// the earliest match. Ties are broken by rule declaration order: the
/// first-declared rule wins because only a strictly smaller index replaces
/// the current best.
pub fn find_start(text: &str, rules: &[Rule], from: usize) -> Option<StartMatch> {
    let slice = &text[from..];
    let mut best: Option<(usize, TokenMatch)> = None;
    for (idx, rule) in rules.iter().enumerate() {
        if let Some(m) = search_any(slice, &rule.start, rule) {
            if best.as_ref().is_none_or(|(_, b)| m.index < b.index) {
                best = Some((idx, m));
            }
        }
    }
    best.map(|(rule, m)| StartMatch {
        rule,
        index: from + m.index,
        cursor: from + m.index + m.len,
    })
}

/// Scan `text` from `from` for the end token of `rule` (and only `rule`;
/// outer scopes stay closed to end matching until this one is popped).
pub fn find_end(text: &str, rule: &Rule, from: usize) -> Option<EndMatch> {
    let slice = &text[from..];
    let m = search_any(slice, &rule.end, rule)?;
    let cursor = if rule.advance { m.index + m.len } else { m.index };
    Some(EndMatch {
        index: from + m.index,
        cursor: from + cursor,
    })
}

/// Start predicate for regex literals.
///
/// A candidate is a `/` in a position where a division operator cannot
/// appear (see `REGEX_PRELUDE_RE`). The candidate is accepted only when the
/// text after it contains a terminating `/` whose body validates as a
/// regular expression; otherwise it is division and the rule does not start.
pub fn regex_literal_start(text: &str, rule: &Rule) -> Option<TokenMatch> {
    let prelude = REGEX_PRELUDE_RE.find(text)?;
    let slash = text[prelude.start()..].find('/')? + prelude.start();
    let body = &text[slash + 1..];
    regex_literal_end(body, rule).map(|_| TokenMatch {
        index: slash,
        len: 1,
    })
}

/// End predicate for regex literals.
///
/// Scans `text` (which starts just past the opening `/`) for the nearest
/// `/` such that everything before it is constructible as a regular
/// expression. A `/` that would leave the pattern invalid is part of the
/// literal body (e.g. inside a character class) and is skipped.
pub fn regex_literal_end(text: &str, _rule: &Rule) -> Option<TokenMatch> {
    let mut from = 0;
    while let Some(offset) = text[from..].find('/') {
        let index = from + offset;
        if Regex::new(&text[..index]).is_ok() {
            return Some(TokenMatch { index, len: 1 });
        }
        from = index + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{build_markup_rules, build_script_rules};

    fn rule_named<'a>(rules: &'a [Rule], name: &str) -> &'a Rule {
        rules.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_find_start_earliest_wins() {
        let rules = build_script_rules();
        // var at 0 beats the brace at 8
        let m = find_start("var x = {\r\n", &rules, 0).unwrap();
        assert_eq!(rules[m.rule].name, "var");
        assert_eq!(m.index, 0);
    }

    #[test]
    fn test_find_start_tie_prefers_declaration_order() {
        let rules = build_markup_rules();
        // <!-- matches both the comment rule and the doctype rule at 0;
        // the comment rule is declared first
        let m = find_start("<!-- note -->\r\n", &rules, 0).unwrap();
        assert_eq!(rules[m.rule].name, "comment");
    }

    #[test]
    fn test_find_start_respects_cursor() {
        let rules = build_script_rules();
        let m = find_start("if (x) {\r\n", &rules, 3).unwrap();
        // From inside the condition the earliest start is the paren... which
        // sits right at the cursor
        assert_eq!(rules[m.rule].name, "bracket");
        assert_eq!(m.index, 3);
        assert_eq!(m.cursor, 4);
    }

    #[test]
    fn test_find_end_advance_moves_past_token() {
        let rules = build_script_rules();
        let block = rule_named(&rules, "block");
        let m = find_end("x; }\r\n", block, 0).unwrap();
        assert_eq!(m.index, 3);
        assert_eq!(m.cursor, 4);
    }

    #[test]
    fn test_find_end_without_advance_stops_at_token() {
        let rules = build_script_rules();
        let var = rule_named(&rules, "var");
        let m = find_end("a = 1;\r\n", var, 0).unwrap();
        assert_eq!(m.index, 5);
        assert_eq!(m.cursor, 5);
    }

    #[test]
    fn test_end_list_order_beats_position() {
        let rules = build_script_rules();
        let string = rule_named(&rules, "double-quoted string");
        // The quote is listed before the newline matcher, so it wins even
        // though both occur
        let m = find_end("abc\"def\r\n", string, 0).unwrap();
        assert_eq!(m.index, 3);
    }

    #[test]
    fn test_regex_literal_start_accepts_literal() {
        let rules = build_script_rules();
        let re_rule = rule_named(&rules, "regex");
        let m = regex_literal_start("x = /a0b/;\r\n", re_rule).unwrap();
        assert_eq!(m, TokenMatch { index: 4, len: 1 });
    }

    #[test]
    fn test_regex_literal_start_rejects_division() {
        let rules = build_script_rules();
        let re_rule = rule_named(&rules, "regex");
        assert!(regex_literal_start("a / b / c\r\n", re_rule).is_none());
    }

    #[test]
    fn test_regex_literal_start_rejects_invalid_body() {
        let rules = build_script_rules();
        let re_rule = rule_named(&rules, "regex");
        // No terminator validates: "(a" is not a regex and nothing follows
        assert!(regex_literal_start("x = /(a/\r\n", re_rule).is_none());
    }

    #[test]
    fn test_regex_literal_end_skips_invalid_terminator() {
        let rules = build_script_rules();
        let re_rule = rule_named(&rules, "regex");
        // The / at 2 gives body "[a" (invalid, open class); the / at 5
        // gives body "[a/]b" (valid), so it is the terminator
        let m = regex_literal_end("[a/]b/ and more", re_rule).unwrap();
        assert_eq!(m.index, 5);
    }
}
