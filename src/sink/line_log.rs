//! In-memory line sink.
//!
//! Keeps the last `LINES` completed lines written through [`core::fmt::Write`].
//! Old lines are dropped when the log is full, long lines are truncated to `LEN`
//! bytes, and `\r` is stripped so `\r\n` terminated output reads back cleanly.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = ReportLog::new();
//! let mut profiler = Profiler::init(150_000_000, ticks, &mut log);
//! // ...
//! for line in log.iter() {
//!     draw(line);
//! }
//! ```

use core::fmt;

use heapless::{Deque, String};

use crate::config::{LINE_LEN, REPORT_LINES};

/// Sized for one full report plus one diagnostic line.
///
/// Lines hold [`LINE_LEN`] bytes, so rows stay intact for event names up to
/// [`MAX_NAME_LEN`](crate::config::MAX_NAME_LEN) characters. Rows with longer names
/// lose their tail (the timestamp and delta columns first).
pub type ReportLog = LineLog<{ REPORT_LINES + 1 }, LINE_LEN>;

/// Ring buffer of text lines.
pub struct LineLog<const LINES: usize, const LEN: usize> {
    lines: Deque<String<LEN>, LINES>,
    // Current line, not yet terminated by '\n'
    pending: String<LEN>,
}

impl<const LINES: usize, const LEN: usize> LineLog<LINES, LEN> {
    /// Create a new empty log.
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            pending: String::new(),
        }
    }

    fn commit(&mut self) {
        // If full, remove oldest
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let line = core::mem::take(&mut self.pending);
        self.lines.push_back(line).ok();
    }

    /// Completed lines (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Get number of completed lines.
    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    /// Check if no line has been completed.
    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Drop all lines, including an unterminated one.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending.clear();
    }
}

impl<const LINES: usize, const LEN: usize> Default for LineLog<LINES, LEN> {
    fn default() -> Self { Self::new() }
}

impl<const LINES: usize, const LEN: usize> fmt::Write for LineLog<LINES, LEN> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            match c {
                '\r' => {}
                '\n' => self.commit(),
                // Truncate: characters past LEN are dropped until the next newline
                _ => {
                    self.pending.push(c).ok();
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;

    #[test]
    fn test_split_lines() {
        let mut log: LineLog<4, 32> = LineLog::new();
        write!(log, "first\r\nsecond\r\n").unwrap();

        assert_eq!(log.iter().collect::<std::vec::Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn test_unterminated_line_is_pending() {
        let mut log: LineLog<4, 32> = LineLog::new();
        log.write_str("no newline yet").unwrap();
        assert!(log.is_empty());

        log.write_str("\n").unwrap();
        assert_eq!(log.iter().next(), Some("no newline yet"));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let mut log: LineLog<4, 32> = LineLog::new();
        log.write_str("table\r\n\r\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().nth(1), Some(""));
    }

    #[test]
    fn test_ring_buffer() {
        let mut log: LineLog<3, 16> = LineLog::new();
        for i in 0..5 {
            writeln!(log, "{i}").unwrap();
        }
        assert_eq!(log.len(), 3);

        // "0" and "1" were dropped
        assert_eq!(log.iter().collect::<std::vec::Vec<_>>(), ["2", "3", "4"]);
    }

    #[test]
    fn test_truncation() {
        let mut log: LineLog<2, 8> = LineLog::new();
        log.write_str("0123456789abcdef\nnext\n").unwrap();

        assert_eq!(log.iter().next(), Some("01234567"));
        assert_eq!(log.iter().nth(1), Some("next"));
    }

    #[test]
    fn test_report_log_keeps_longest_name_row() {
        use crate::config::MAX_NAME_LEN;
        use crate::report;
        use crate::sequence::{Event, Session};

        static LONGEST: &str = "abcdefghijklmnopqrstuvwxyz0123456789ABCD";
        static TOO_LONG: &str = "abcdefghijklmnopqrstuvwxyz0123456789ABCDE";
        assert_eq!(LONGEST.len(), MAX_NAME_LEN);

        let mut session = Session::new();
        session.restart("names");
        session.push(Event::new(LONGEST, 168)).unwrap();
        session.push(Event::new(TOO_LONG, 336)).unwrap();

        let mut log = ReportLog::new();
        report::render(&mut log, &session, 168).unwrap();

        let rows: std::vec::Vec<&str> = log.iter().filter(|l| l.starts_with("| ")).collect();
        assert_eq!(
            rows[0],
            format!("| {LONGEST} |            1 us |            1 us |")
        );
        assert_eq!(rows[0].len(), LINE_LEN);
        // One name character over: the closing bar is cut
        assert_eq!(rows[1].len(), LINE_LEN);
        assert!(rows[1].ends_with(" us "));
    }

    #[test]
    fn test_clear() {
        let mut log: LineLog<2, 8> = LineLog::new();
        log.write_str("a\nb").unwrap();
        log.clear();
        log.write_str("\n").unwrap();
        assert_eq!(log.iter().next(), Some(""));
    }
}
