//! Scale functions mapping data domains onto pixel ranges.
//!
//! Charts compute their geometry through these instead of talking to the SVG
//! directly: a linear scale for values, a time scale for date axes, and a
//! threshold scale relating value buckets to legend colors.

use time::{Date, Month};

/// Continuous linear mapping from a value domain onto a pixel range.
///
/// Ranges may be inverted (`range.0 > range.1`) for y axes where larger
/// values sit closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values inside the domain at a "nice" step (1, 2, or 5
    /// times a power of ten), aiming for roughly `count` ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = ordered(self.domain);
        if d0 == d1 || count == 0 {
            return vec![d0];
        }

        let step = tick_step(d1 - d0, count);
        let start = (d0 / step).ceil();
        let stop = (d1 / step).floor();

        let mut ticks = Vec::new();
        let mut i = start;
        while i <= stop {
            ticks.push(i * step);
            i += 1.0;
        }
        ticks
    }
}

/// Mapping from calendar dates onto a pixel range.
///
/// Dates are projected through their julian day so the interpolation itself
/// is plain linear math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    inner: LinearScale,
    domain: (Date, Date),
}

impl TimeScale {
    pub fn new(domain: (Date, Date), range: (f64, f64)) -> Self {
        let inner = LinearScale::new(
            (
                domain.0.to_julian_day() as f64,
                domain.1.to_julian_day() as f64,
            ),
            range,
        );
        Self { inner, domain }
    }

    pub fn domain(&self) -> (Date, Date) {
        self.domain
    }

    pub fn scale(&self, date: Date) -> f64 {
        self.inner.scale(date.to_julian_day() as f64)
    }

    /// January-1st ticks at a year step chosen to land near `count` ticks.
    pub fn year_ticks(&self, count: usize) -> Vec<Date> {
        let (start, end) = self.domain;
        let span_years = (end.year() - start.year()).max(1) as f64;
        let step = year_step(span_years, count.max(1) as f64);

        let first = {
            let mut year = start.year();
            if year.rem_euclid(step) != 0 {
                year += step - year.rem_euclid(step);
            }
            year
        };

        let mut ticks = Vec::new();
        let mut year = first;
        while year <= end.year() {
            if let Ok(date) = Date::from_calendar_date(year, Month::January, 1) {
                if date >= start && date <= end {
                    ticks.push(date);
                }
            }
            year += step;
        }
        ticks
    }
}

/// Piecewise-constant mapping from breakpoints to a color per bucket.
///
/// With `n` breakpoints the scale spans `n + 1` colors; values below the
/// first breakpoint take the first color, values at or above the last take
/// the final color.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    breakpoints: Vec<f64>,
    colors: Vec<&'static str>,
}

impl ThresholdScale {
    pub fn new(breakpoints: Vec<f64>, colors: Vec<&'static str>) -> Self {
        debug_assert!(colors.len() == breakpoints.len() + 1);
        Self {
            breakpoints,
            colors,
        }
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn color(&self, value: f64) -> &'static str {
        let bucket = self
            .breakpoints
            .iter()
            .position(|b| value < *b)
            .unwrap_or(self.breakpoints.len());
        self.colors[bucket]
    }

    /// Value bounds of the bucket behind `colors()[index]`; open-ended at
    /// the extremes. Drives legend swatch widths.
    pub fn invert_extent(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let lower = index.checked_sub(1).map(|i| self.breakpoints[i]);
        let upper = self.breakpoints.get(index).copied();
        (lower, upper)
    }

    pub fn colors(&self) -> &[&'static str] {
        &self.colors
    }
}

/// `count` breakpoints spread from `min` across the span in `count` equal
/// steps, the first sitting on `min` itself.
pub fn evenly_spaced(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / count as f64;
    (0..count).map(|i| min + i as f64 * step).collect()
}

fn ordered(domain: (f64, f64)) -> (f64, f64) {
    if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;

    // Error thresholds at sqrt(50), sqrt(10), sqrt(2): round the raw step to
    // the nearest of 1, 2, 5, or 10 times its magnitude.
    if error >= 7.07 {
        magnitude * 10.0
    } else if error >= 3.16 {
        magnitude * 5.0
    } else if error >= 1.41 {
        magnitude * 2.0
    } else {
        magnitude
    }
}

fn year_step(span_years: f64, count: f64) -> i32 {
    const STEPS: [i32; 8] = [1, 2, 5, 10, 20, 25, 50, 100];
    let raw = span_years / count;
    STEPS
        .into_iter()
        .find(|step| f64::from(*step) >= raw)
        .unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use time::macros::date;

    #[test]
    fn linear_scale_interpolates_and_inverts_ranges() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 800.0));
        assert_relative_eq!(scale.scale(25.0), 200.0);

        let y = LinearScale::new((0.0, 100.0), (400.0, 0.0));
        assert_relative_eq!(y.scale(0.0), 400.0);
        assert_relative_eq!(y.scale(100.0), 0.0);
    }

    #[test]
    fn linear_scale_handles_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 800.0));
        assert_relative_eq!(scale.scale(5.0), 0.0);
        assert_eq!(scale.ticks(10), vec![5.0]);
    }

    #[test]
    fn ticks_land_on_nice_steps() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(
            scale.ticks(5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );

        let scale = LinearScale::new((0.0, 0.95), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_relative_eq!(ticks[1] - ticks[0], 0.2);
    }

    #[test]
    fn time_scale_spans_domain() {
        let scale = TimeScale::new((date!(1947 - 01 - 01), date!(2015 - 01 - 01)), (0.0, 800.0));
        assert_relative_eq!(scale.scale(date!(1947 - 01 - 01)), 0.0);
        assert_relative_eq!(scale.scale(date!(2015 - 01 - 01)), 800.0);
        let mid = scale.scale(date!(1981 - 01 - 01));
        assert!(mid > 390.0 && mid < 410.0);
    }

    #[test]
    fn year_ticks_use_round_years() {
        let scale = TimeScale::new((date!(1947 - 01 - 01), date!(2015 - 01 - 01)), (0.0, 800.0));
        let ticks = scale.year_ticks(10);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            assert_eq!(tick.month(), Month::January);
            assert_eq!(tick.year() % 10, 0);
        }
    }

    #[test]
    fn threshold_scale_buckets_values() {
        let scale = ThresholdScale::new(vec![10.0, 20.0], vec!["low", "mid", "high"]);
        assert_eq!(scale.color(5.0), "low");
        assert_eq!(scale.color(10.0), "mid");
        assert_eq!(scale.color(15.0), "mid");
        assert_eq!(scale.color(25.0), "high");
    }

    #[test]
    fn invert_extent_is_open_at_the_ends() {
        let scale = ThresholdScale::new(vec![10.0, 20.0], vec!["low", "mid", "high"]);
        assert_eq!(scale.invert_extent(0), (None, Some(10.0)));
        assert_eq!(scale.invert_extent(1), (Some(10.0), Some(20.0)));
        assert_eq!(scale.invert_extent(2), (Some(20.0), None));
    }

    #[test]
    fn evenly_spaced_starts_at_min() {
        let points = evenly_spaced(0.0, 80.0, 8);
        assert_eq!(points.len(), 8);
        assert_relative_eq!(points[0], 0.0);
        assert_relative_eq!(points[7], 70.0);
    }
}
