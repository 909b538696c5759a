//! Client-side style pagination over a fetched id list.
//!
//! The full list of saved game ids is fetched once; pages of fixed size are
//! then revealed incrementally. The cursor starts at 0, advances by one page
//! per call, and becomes a sentinel once the list is exhausted, after which
//! further calls are no-ops.

/// Number of ids revealed per page.
pub const PAGE_SIZE: usize = 15;

/// Cursor value marking an exhausted list.
pub const CURSOR_DONE: i64 = -1;

/// Incremental pager over a complete, ordered id list.
#[derive(Debug)]
pub struct Paginator {
    source: Vec<i64>,
    cursor: i64,
    visible: Vec<i64>,
}

impl Paginator {
    /// Start paging at `cursor` (0 for the beginning).
    ///
    /// An empty source or an out-of-range cursor starts exhausted and never
    /// yields a page.
    pub fn new(source: Vec<i64>, cursor: i64) -> Self {
        let cursor = if cursor < 0 || cursor as usize >= source.len() {
            CURSOR_DONE
        } else {
            cursor
        };
        Self {
            source,
            cursor,
            visible: Vec::new(),
        }
    }

    /// Reveal the next page, appending it to the visible subset.
    ///
    /// Returns `true` if a page was appended; once exhausted, always `false`.
    pub fn load_more(&mut self) -> bool {
        if self.cursor == CURSOR_DONE {
            return false;
        }

        let start = self.cursor as usize;
        let end = (start + PAGE_SIZE).min(self.source.len());
        self.visible.extend_from_slice(&self.source[start..end]);

        self.cursor = if end >= self.source.len() {
            CURSOR_DONE
        } else {
            end as i64
        };
        true
    }

    /// The ids revealed so far, in source order.
    pub fn visible(&self) -> &[i64] {
        &self.visible
    }

    /// Cursor for the next page; `CURSOR_DONE` exactly when the visible
    /// subset reaches the end of the source.
    pub fn next_cursor(&self) -> i64 {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_never_appends() {
        let mut pager = Paginator::new(Vec::new(), 0);
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
        assert!(!pager.load_more());
        assert!(pager.visible().is_empty());
    }

    #[test]
    fn test_short_source_single_append() {
        let mut pager = Paginator::new((0..7).collect(), 0);
        assert_eq!(pager.next_cursor(), 0);
        assert!(pager.load_more());
        assert_eq!(pager.visible().len(), 7);
        // Sentinel set immediately after the final append
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
        assert!(!pager.load_more());
        assert_eq!(pager.visible().len(), 7);
    }

    #[test]
    fn test_exact_page_boundary() {
        let mut pager = Paginator::new((0..15).collect(), 0);
        assert!(pager.load_more());
        assert_eq!(pager.visible().len(), 15);
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
        assert!(!pager.load_more());
    }

    #[test]
    fn test_append_count_matches_ceiling_division() {
        for n in [1usize, 14, 15, 16, 29, 30, 31, 100] {
            let mut pager = Paginator::new((0..n as i64).collect(), 0);
            let mut appends = 0;
            while pager.load_more() {
                appends += 1;
                // Exhaustion may only be reached by the final append
                if appends < n.div_ceil(PAGE_SIZE) {
                    assert_ne!(pager.next_cursor(), CURSOR_DONE, "n={} append={}", n, appends);
                }
            }
            assert_eq!(appends, n.div_ceil(PAGE_SIZE), "n={}", n);
            assert_eq!(pager.next_cursor(), CURSOR_DONE);
            assert_eq!(pager.visible(), (0..n as i64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_resume_from_cursor_covers_remainder() {
        let source: Vec<i64> = (0..33).collect();

        let mut pager = Paginator::new(source.clone(), 0);
        assert!(pager.load_more());
        assert_eq!(pager.visible().len(), 15);
        assert_eq!(pager.next_cursor(), 15);

        let mut pager = Paginator::new(source.clone(), 15);
        assert!(pager.load_more());
        assert_eq!(pager.visible().len(), 15);
        assert_eq!(pager.next_cursor(), 30);

        let mut pager = Paginator::new(source, 30);
        assert!(pager.load_more());
        assert_eq!(pager.visible(), &[30, 31, 32]);
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
    }

    #[test]
    fn test_done_cursor_is_noop() {
        let mut pager = Paginator::new((0..5).collect(), CURSOR_DONE);
        assert!(!pager.load_more());
        assert!(pager.visible().is_empty());
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
    }

    #[test]
    fn test_out_of_range_cursor_is_exhausted() {
        let mut pager = Paginator::new((0..5).collect(), 5);
        assert!(!pager.load_more());
        assert!(pager.visible().is_empty());
        assert_eq!(pager.next_cursor(), CURSOR_DONE);
    }

    #[test]
    fn test_order_preserved() {
        let mut pager = Paginator::new(vec![42, 7, 99, 3], 0);
        assert!(pager.load_more());
        assert_eq!(pager.visible(), &[42, 7, 99, 3]);
    }
}
