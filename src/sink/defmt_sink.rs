//! RTT sink: prints every completed line with `defmt::println!`.

use core::fmt;

use heapless::String;

use crate::config::LINE_LEN;

/// Line-buffered `defmt` printer.
///
/// Lines longer than `LINE_LEN` are split rather than truncated.
pub struct DefmtSink {
    line: String<LINE_LEN>,
}

impl DefmtSink {
    pub const fn new() -> Self { Self { line: String::new() } }

    fn flush(&mut self) {
        defmt::println!("{=str}", self.line.as_str());
        self.line.clear();
    }
}

impl Default for DefmtSink {
    fn default() -> Self { Self::new() }
}

impl fmt::Write for DefmtSink {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            match c {
                '\r' => {}
                '\n' => self.flush(),
                _ => {
                    if self.line.push(c).is_err() {
                        self.flush();
                        self.line.push(c).ok();
                    }
                }
            }
        }
        Ok(())
    }
}
