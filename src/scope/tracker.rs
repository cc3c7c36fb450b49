/// Scope stack and indent buffer bookkeeping
///
/// The tracker owns two stacks. The active rule stack records which
/// constructs are currently open (innermost last); only the top entry's end
/// tokens are ever evaluated. The indent buffer records, per origin line,
/// how many indentation levels those constructs contribute — several
/// indent-bearing opens on one line share a single entry and therefore a
/// single level.

/// One indent buffer entry: all indent-bearing opens from one source line.
#[derive(Debug, Clone, Copy)]
struct IndentEntry {
    /// Number of open indent-bearing constructs from this line
    count: usize,
    /// Whether the entry's construct is still open as of the most recently
    /// processed close
    open: bool,
    /// Line the constructs were opened on
    origin_line: usize,
}

/// Tracks open constructs and the indentation they imply.
///
/// Created empty per document pass. Well-formed input drains both stacks;
/// unbalanced input leaves dangling entries, which is tolerated.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    /// Indices into the rule table, innermost last
    active: Vec<usize>,
    buffer: Vec<IndentEntry>,
}

impl ScopeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule index of the innermost open construct, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<usize> {
        self.active.last().copied()
    }

    /// Push a newly started rule. For indent-bearing rules, a same-line top
    /// entry absorbs the open; otherwise a new entry begins.
    pub fn open(&mut self, rule_idx: usize, indents: bool, line: usize) {
        self.active.push(rule_idx);
        if indents {
            match self.buffer.last_mut() {
                Some(top) if top.origin_line == line => top.count += 1,
                _ => self.buffer.push(IndentEntry {
                    count: 1,
                    open: true,
                    origin_line: line,
                }),
            }
        }
    }

    /// Pop the innermost rule. For indent-bearing rules the top buffer entry
    /// stays marked open only when the close happens on its own origin line
    /// — a construct that opened and closed within one line must not indent
    /// that line, while one carried over from an earlier line already did.
    pub fn close(&mut self, indents: bool, line: usize) {
        self.active.pop();
        if indents {
            if let Some(top) = self.buffer.last_mut() {
                top.open = line == top.origin_line;
                top.count -= 1;
                if top.count == 0 {
                    self.buffer.pop();
                }
            }
        }
    }

    /// Indentation depth for `line`: one unit per open entry that originated
    /// on an earlier line. Entries born on `line` itself indent only the
    /// lines after it.
    #[must_use]
    pub fn depth(&self, line: usize) -> usize {
        self.buffer
            .iter()
            .filter(|e| e.open && e.origin_line != line)
            .count()
    }

    /// Number of currently open constructs (dangling at end-of-document for
    /// unbalanced input).
    #[must_use]
    pub fn active_depth(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_balances() {
        let mut tracker = ScopeTracker::new();
        tracker.open(0, true, 0);
        assert_eq!(tracker.innermost(), Some(0));
        assert_eq!(tracker.depth(1), 1);
        tracker.close(true, 2);
        assert_eq!(tracker.innermost(), None);
        assert_eq!(tracker.depth(3), 0);
    }

    #[test]
    fn test_same_line_opens_share_one_level() {
        let mut tracker = ScopeTracker::new();
        // Two brackets opened on line 0 indent line 1 by one unit, not two
        tracker.open(0, true, 0);
        tracker.open(1, true, 0);
        assert_eq!(tracker.depth(1), 1);
    }

    #[test]
    fn test_own_line_does_not_indent_itself() {
        let mut tracker = ScopeTracker::new();
        tracker.open(0, true, 5);
        assert_eq!(tracker.depth(5), 0);
        assert_eq!(tracker.depth(6), 1);
    }

    #[test]
    fn test_ignore_rules_leave_buffer_untouched() {
        let mut tracker = ScopeTracker::new();
        tracker.open(3, false, 0);
        assert_eq!(tracker.active_depth(), 1);
        assert_eq!(tracker.depth(1), 0);
        tracker.close(false, 1);
        assert_eq!(tracker.active_depth(), 0);
    }

    #[test]
    fn test_close_on_later_line_clears_open_flag() {
        let mut tracker = ScopeTracker::new();
        tracker.open(0, true, 0);
        tracker.open(1, true, 0);
        // First close on a later line: entry survives with count 1 but is
        // no longer counted
        tracker.close(true, 3);
        assert_eq!(tracker.depth(4), 0);
        tracker.close(true, 4);
        assert_eq!(tracker.depth(5), 0);
    }

    #[test]
    fn test_nested_entries_from_different_lines() {
        let mut tracker = ScopeTracker::new();
        tracker.open(0, true, 0);
        tracker.open(1, true, 1);
        assert_eq!(tracker.depth(2), 2);
        tracker.close(true, 2);
        assert_eq!(tracker.depth(3), 1);
    }
}
