/// Line scanner: re-emits a document with corrected leading indentation
///
/// One pass over the document. Each line is trimmed, re-terminated with
/// `\r\n` and escape-neutralized for matching; the scanner then resolves
/// start/end events at the cursor until the line is exhausted and commits
/// the line with an indentation prefix derived from the constructs still
/// open from earlier lines. Only leading whitespace ever changes.
///
/// Unbalanced input is tolerated: scanning simply reaches end-of-document
/// with constructs still open and the remaining lines keep whatever depth
/// those constructs imply.
use crate::parser::escape::neutralize_escapes;
use crate::parser::matcher::{find_end, find_start};
use crate::scope::{build_markup_rules, build_script_rules, Rule, ScopeTracker};

/// Reindent JavaScript- or CSS-like source. `indent_unit` is repeated once
/// per depth level (e.g. two spaces, a tab).
#[must_use]
pub fn reindent_script(source: &str, indent_unit: &str) -> String {
    reindent(source, &build_script_rules(), indent_unit)
}

/// Reindent HTML-like source.
#[must_use]
pub fn reindent_markup(source: &str, indent_unit: &str) -> String {
    reindent(source, &build_markup_rules(), indent_unit)
}

/// Outcome of scanning a single line.
enum LineOutcome {
    /// Line exhausted normally; commit with the current depth
    Exhausted,
    /// Remainder sits inside an unterminated ignore construct; commit the
    /// raw line untouched
    PassThrough,
}

/// Core scan loop, generic over the rule table.
///
/// Output lines are `\r\n`-terminated regardless of the input's endings.
#[must_use]
pub fn reindent(source: &str, rules: &[Rule], indent_unit: &str) -> String {
    let raw_lines: Vec<&str> = split_lines(source);
    let mut output = String::with_capacity(source.len() + raw_lines.len() * indent_unit.len());
    let mut tracker = ScopeTracker::new();
    // Depth applied to the line currently being committed; recomputed at
    // each line boundary and again mid-line for a column-0 close
    let mut depth = 0;

    for (l, raw) in raw_lines.iter().enumerate() {
        let line = format!("{}\r\n", raw.trim());
        let scan = neutralize_escapes(&line);

        match scan_line(&scan, rules, &mut tracker, l, &mut depth) {
            LineOutcome::PassThrough => {
                output.push_str(raw);
                output.push_str("\r\n");
            }
            LineOutcome::Exhausted => {
                for _ in 0..depth {
                    output.push_str(indent_unit);
                }
                output.push_str(&line);
            }
        }

        depth = tracker.depth(l + 1);
    }

    output
}

/// Resolve all start/end events on one scanned line.
///
/// Decision priority per iteration:
/// 1. innermost rule is `ignore` and has no end here: pass the line through
/// 2. an end that the start does not precede: close (end-at-start ties
///    close first — `}else` depends on this)
/// 3. a start: open
/// 4. neither: the line is exhausted
fn scan_line(
    scan: &str,
    rules: &[Rule],
    tracker: &mut ScopeTracker,
    l: usize,
    depth: &mut usize,
) -> LineOutcome {
    let mut pos = 0;
    loop {
        let start = find_start(scan, rules, pos);

        if let Some(rule_idx) = tracker.innermost() {
            let rule = &rules[rule_idx];
            match find_end(scan, rule, pos) {
                None => {
                    if rule.ignore {
                        return LineOutcome::PassThrough;
                    }
                }
                Some(end)
                    if rule.ignore || start.as_ref().is_none_or(|s| end.index <= s.index) =>
                {
                    tracker.close(rule.indent, l);
                    if rule.indent && end.index == 0 {
                        // A closer at column 0 dedents this very line
                        *depth = tracker.depth(l);
                    }
                    pos = end.cursor;
                    continue;
                }
                Some(_) => {}
            }
        }

        match start {
            Some(start) => {
                tracker.open(start.rule, rules[start.rule].indent, l);
                pos = start.cursor;
            }
            None => return LineOutcome::Exhausted,
        }
    }
}

/// Split on `\n`, accepting both `\n` and `\r\n` endings. A trailing
/// terminator does not produce a phantom last line, and an empty document
/// has no lines at all.
fn split_lines(source: &str) -> Vec<&str> {
    if source.is_empty() {
        return Vec::new();
    }
    let trimmed = source.strip_suffix('\n').unwrap_or(source);
    trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
