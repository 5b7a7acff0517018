//! Report table rendering.
//!
//! Output of one sequence (each line ends with `\r\n`):
//!
//! ```text
//! Profiling "load" sequence:
//! |---------- Event ----------|--- Timestamp ---|----- Delta -----|
//! | start                     |            0 us |            0 us |
//! | mid                       |           10 us |           10 us |
//! | done                      |           30 us |           20 us |
//!
//! ```
//!
//! Timestamps are microseconds since `begin()`; the delta of the first row is
//! measured from `begin()` as well.

use core::fmt::{self, Write};

use crate::config::{NAME_WIDTH, VALUE_WIDTH};
use crate::sequence::{Event, Session};

/// Column rule printed under the title.
pub const TABLE_RULE: &str = "|---------- Event ----------|--- Timestamp ---|----- Delta -----|";

/// Line terminator for serial terminals.
pub const EOL: &str = "\r\n";

/// Convert raw counter ticks to whole microseconds (truncating).
#[inline]
pub const fn ticks_to_us(
    ticks: u32,
    ticks_per_us: u32,
) -> u32 {
    match ticks.checked_div(ticks_per_us) {
        Some(us) => us,
        None => 0,
    }
}

/// One table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    pub name: &'static str,
    /// Microseconds since `begin()`.
    pub timestamp_us: u32,
    /// Microseconds since the previous row. Negative only if the counter wrapped.
    pub delta_us: i64,
}

/// Rows of a session, in capture order.
pub fn rows(
    events: &[Event],
    ticks_per_us: u32,
) -> impl Iterator<Item = Row> + '_ {
    events.iter().scan(0u32, move |previous_us, event| {
        let timestamp_us = ticks_to_us(event.timestamp, ticks_per_us);
        let delta_us = i64::from(timestamp_us) - i64::from(*previous_us);
        *previous_us = timestamp_us;
        Some(Row {
            name: event.name,
            timestamp_us,
            delta_us,
        })
    })
}

/// Write the full report of `session` to `out`.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    session: &Session,
    ticks_per_us: u32,
) -> fmt::Result {
    write!(out, "Profiling \"{}\" sequence:{EOL}", session.name())?;
    write!(out, "{TABLE_RULE}{EOL}")?;

    for row in rows(session.events(), ticks_per_us) {
        write!(
            out,
            "| {:<name_w$} | {:>value_w$} us | {:>value_w$} us |{EOL}",
            row.name,
            row.timestamp_us,
            row.delta_us,
            name_w = NAME_WIDTH,
            value_w = VALUE_WIDTH,
        )?;
    }

    out.write_str(EOL)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(
        name: &'static str,
        events: &[(&'static str, u32)],
    ) -> Session {
        let mut session = Session::new();
        session.restart(name);
        for &(event, ticks) in events {
            session.push(Event::new(event, ticks)).unwrap();
        }
        session
    }

    #[test]
    fn test_ticks_to_us() {
        assert_eq!(ticks_to_us(1680, 168), 10);
        assert_eq!(ticks_to_us(167, 168), 0);
        assert_eq!(ticks_to_us(u32::MAX, 1), u32::MAX);
        assert_eq!(ticks_to_us(100, 0), 0);
    }

    #[test]
    fn test_rows_deltas() {
        let session = session("load", &[("start", 0), ("mid", 1680), ("done", 5040)]);
        let rows: std::vec::Vec<Row> = rows(session.events(), 168).collect();

        assert_eq!(
            rows,
            [
                Row { name: "start", timestamp_us: 0, delta_us: 0 },
                Row { name: "mid", timestamp_us: 10, delta_us: 10 },
                Row { name: "done", timestamp_us: 30, delta_us: 20 },
            ]
        );
    }

    #[test]
    fn test_first_delta_from_begin() {
        let session = session("late", &[("first", 1500)]);
        let row = rows(session.events(), 150).next().unwrap();
        assert_eq!(row.timestamp_us, 10);
        assert_eq!(row.delta_us, 10);
    }

    #[test]
    fn test_wrapped_counter_gives_negative_delta() {
        let session = session("wrap", &[("before", u32::MAX), ("after", 100)]);
        let rows: std::vec::Vec<Row> = rows(session.events(), 1).collect();
        assert_eq!(rows[1].delta_us, 100 - i64::from(u32::MAX));
    }

    #[test]
    fn test_render_table() {
        let session = session("load", &[("start", 0), ("mid", 1680), ("done", 5040)]);
        let mut out = std::string::String::new();
        render(&mut out, &session, 168).unwrap();

        let expected = "Profiling \"load\" sequence:\r\n\
                        |---------- Event ----------|--- Timestamp ---|----- Delta -----|\r\n\
                        | start                     |            0 us |            0 us |\r\n\
                        | mid                       |           10 us |           10 us |\r\n\
                        | done                      |           30 us |           20 us |\r\n\
                        \r\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_columns_align_with_rule() {
        let session = session("align", &[("x", 123_456)]);
        let mut out = std::string::String::new();
        render(&mut out, &session, 1).unwrap();

        let row = out.lines().nth(2).unwrap();
        let rule_bars: std::vec::Vec<usize> = TABLE_RULE.match_indices('|').map(|(i, _)| i).collect();
        let row_bars: std::vec::Vec<usize> = row.match_indices('|').map(|(i, _)| i).collect();
        assert_eq!(rule_bars, row_bars);
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let name = "an_event_name_longer_than_the_column";
        let session = session("long", &[(name, 0)]);
        let mut out = std::string::String::new();
        render(&mut out, &session, 1).unwrap();
        assert!(out.contains(name));
    }
}
