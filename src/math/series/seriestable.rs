use std::fmt;

use crate::math::series::seriesevaluator::SeriesResult;

/// Text table comparing partial sums with the reference value.
///
/// ```text
/// exp(x) at x = 1 with 3 terms, reference value 2.718281828459
///    r                term                 sum               error
///    0      1.000000000000      1.000000000000     -1.718281828459
/// ```
pub struct SeriesTable<'a> {
    result: &'a SeriesResult,
    precision: usize
}

const COLUMN_WIDTH: usize = 20;

impl<'a> SeriesTable<'a> {
    pub fn new(result: &'a SeriesResult) -> SeriesTable<'a> {
        SeriesTable { result, precision: 12 }
    }

    pub fn with_precision(mut self, precision: usize) -> SeriesTable<'a> {
        self.precision = precision;
        self
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
        // Large or vanishing magnitudes switch to exponent notation so the columns stay aligned.
        let magnitude = value.abs();
        if value.is_finite() && magnitude != 0.0 && !(1e-4..1e8).contains(&magnitude) {
            write!(f, "{:>width$.prec$e}", value, width = COLUMN_WIDTH, prec = self.precision)
        } else {
            write!(f, "{:>width$.prec$}", value, width = COLUMN_WIDTH, prec = self.precision)
        }
    }
}

impl fmt::Display for SeriesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}(x) at x = {} with {} terms, reference value {:.prec$}",
            self.result.function_name(),
            self.result.x(),
            self.result.len(),
            self.result.reference_value(),
            prec = self.precision
        )?;
        writeln!(
            f,
            "{:>4}{:>width$}{:>width$}{:>width$}",
            "r", "term", "sum", "error",
            width = COLUMN_WIDTH
        )?;
        for row in self.result.rows() {
            write!(f, "{:>4}", row.index())?;
            self.write_value(f, row.term())?;
            self.write_value(f, row.cumulative())?;
            self.write_value(f, row.error())?;
            writeln!(f)?;
        }
        Ok(())
    }
}
