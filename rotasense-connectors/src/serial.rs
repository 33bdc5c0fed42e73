//! Serial monitor output
//!
//! Writes one line per report to anything implementing `core::fmt::Write`
//! (a UART wrapper on target, a `String` in tests).
//!
//! Two layouts:
//!
//! ```text
//! Speed:   RPM: 29.30 | Avg RPM: 29.2969 | Speed (km/h): 1.8224 | Avg Speed (km/h): 1.8224
//! Pulses:  3 pulses: 1208 rpm: 84.37500
//! ```
//!
//! The speed fields are dropped when the estimator has no wheel configured.
//! Lines end in `\r\n`, the terminator Arduino's `Serial.println` sends.

use core::fmt::Write;

use rotasense_core::RateReport;

use crate::{ReportError, Reporter};

/// Line terminator written after every report
pub const LINE_END: &str = "\r\n";

/// Line format written for each report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineLayout {
    /// RPM, average RPM and, with a wheel, km/h speeds
    #[default]
    Speed,

    /// Window pulses, cumulative pulses and RPM
    Pulses,
}

/// Reporter writing text lines to a `core::fmt::Write` sink
pub struct SerialLineReporter<W: Write> {
    writer: W,
    layout: LineLayout,
    lines: u32,
}

impl<W: Write> SerialLineReporter<W> {
    /// Reporter using the speed layout
    pub fn new(writer: W) -> Self {
        Self::with_layout(writer, LineLayout::Speed)
    }

    /// Reporter using the given layout
    pub fn with_layout(writer: W, layout: LineLayout) -> Self {
        Self { writer, layout, lines: 0 }
    }

    /// Lines written so far
    pub fn lines_written(&self) -> u32 {
        self.lines
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_speed_line(&mut self, report: &RateReport) -> core::fmt::Result {
        write!(
            self.writer,
            "RPM: {:.2} | Avg RPM: {:.4}",
            report.instantaneous_rpm, report.average_rpm
        )?;

        if let (Some(kph), Some(avg_kph)) = (report.speed_kph(), report.average_speed_kph()) {
            write!(
                self.writer,
                " | Speed (km/h): {:.4} | Avg Speed (km/h): {:.4}",
                kph, avg_kph
            )?;
        }

        self.writer.write_str(LINE_END)
    }

    fn write_pulses_line(&mut self, report: &RateReport) -> core::fmt::Result {
        write!(
            self.writer,
            "{} pulses: {} rpm: {:.5}",
            report.raw_pulse_count, report.total_pulses, report.instantaneous_rpm
        )?;
        self.writer.write_str(LINE_END)
    }
}

impl<W: Write> Reporter for SerialLineReporter<W> {
    type Error = ReportError;

    fn report(&mut self, report: &RateReport) -> Result<(), Self::Error> {
        match self.layout {
            LineLayout::Speed => self.write_speed_line(report)?,
            LineLayout::Pulses => self.write_pulses_line(report)?,
        }
        self.lines = self.lines.wrapping_add(1);
        Ok(())
    }
}
