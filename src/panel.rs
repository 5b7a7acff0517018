//! On-screen report panel.
//!
//! Draws the lines captured by a [`LineLog`](crate::LineLog) on any RGB565 display,
//! for boards that have a screen but no debug probe attached.
//!
//! - Title (`Profiling "..." sequence:`): ProFont, green
//! - Table rule and rows: 4x6 mono font, white (65 columns = 260 px)
//! - Anything else (diagnostics): 4x6 mono font, yellow
//!
//! Lines that would not fit below the previous one are skipped.

use embedded_graphics::mono_font::ascii::FONT_4X6;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

/// Title font.
pub const TITLE_FONT: &MonoFont<'static> = &profont::PROFONT_9_POINT;

/// Table and diagnostic font.
pub const TABLE_FONT: &MonoFont<'static> = &FONT_4X6;

/// Left/top margin in pixels.
const MARGIN: i32 = 2;

/// Extra pixels between lines.
const LINE_GAP: i32 = 1;

/// Draw report lines top to bottom. Returns how many lines were drawn.
pub fn draw_report<'a, D, I>(
    display: &mut D,
    lines: I,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
    I: IntoIterator<Item = &'a str>,
{
    let title_style = MonoTextStyle::new(TITLE_FONT, Rgb565::GREEN);
    let table_style = MonoTextStyle::new(TABLE_FONT, Rgb565::WHITE);
    let warn_style = MonoTextStyle::new(TABLE_FONT, Rgb565::YELLOW);

    // Clear screen
    display.clear(Rgb565::BLACK)?;

    let bottom = display.bounding_box().size.height as i32;
    let mut y = MARGIN;
    let mut drawn = 0;

    for line in lines {
        let style = if line.starts_with("Profiling \"") {
            title_style
        } else if line.starts_with('|') || line.is_empty() {
            table_style
        } else {
            warn_style
        };

        let height = style.font.character_size.height as i32;
        if y + height > bottom {
            break;
        }

        if !line.is_empty() {
            Text::with_baseline(line, Point::new(MARGIN, y), style, Baseline::Top).draw(display)?;
            drawn += 1;
        }
        y += height + LINE_GAP;
    }

    Ok(drawn)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use core::fmt::Write;

    use super::*;
    use crate::report;
    use crate::sequence::{Event, Session};
    use crate::sink::ReportLog;

    /// 320x240 target that counts lit pixels and pixels outside the screen.
    struct Canvas {
        size: Size,
        lit: usize,
        outside: usize,
    }

    impl Canvas {
        fn new(
            width: u32,
            height: u32,
        ) -> Self {
            Self {
                size: Size::new(width, height),
                lit: 0,
                outside: 0,
            }
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<P>(
            &mut self,
            pixels: P,
        ) -> Result<(), Self::Error>
        where
            P: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if !self.bounding_box().contains(point) {
                    self.outside += 1;
                } else if color != Rgb565::BLACK {
                    self.lit += 1;
                }
            }
            Ok(())
        }
    }

    fn full_report() -> ReportLog {
        let mut session = Session::new();
        session.restart("panel");
        for i in 0..crate::MAX_EVENTS as u32 {
            session.push(Event::new("checkpoint", i * 1000)).unwrap();
        }
        let mut log = ReportLog::new();
        report::render(&mut log, &session, 100).unwrap();
        log
    }

    #[test]
    fn test_empty_log_only_clears() {
        let mut canvas = Canvas::new(320, 240);
        let drawn = draw_report(&mut canvas, ReportLog::new().iter()).unwrap();
        assert_eq!(drawn, 0);
        assert_eq!(canvas.lit, 0);
    }

    #[test]
    fn test_full_report_fits_screen() {
        let log = full_report();
        let mut canvas = Canvas::new(320, 240);
        let drawn = draw_report(&mut canvas, log.iter()).unwrap();

        // Title, rule and every row; the blank line is not drawn
        assert_eq!(drawn, crate::MAX_EVENTS + 2);
        assert!(canvas.lit > 0);
        assert_eq!(canvas.outside, 0);
    }

    #[test]
    fn test_clips_to_display_height() {
        let log = full_report();
        let mut canvas = Canvas::new(320, 40);
        let drawn = draw_report(&mut canvas, log.iter()).unwrap();

        assert!(drawn < crate::MAX_EVENTS + 2);
        assert!(drawn > 0);
        assert_eq!(canvas.outside, 0);
    }

    #[test]
    fn test_diagnostic_line() {
        let mut log = ReportLog::new();
        write!(log, "{}\r\n", crate::ProfileError::NoEvents).unwrap();

        let mut canvas = Canvas::new(320, 240);
        assert_eq!(draw_report(&mut canvas, log.iter()).unwrap(), 1);
        assert!(canvas.lit > 0);
    }
}
