// ---------------------------------------------------------------------------
// Linear scale: data value → pixel length
// ---------------------------------------------------------------------------

/// Upper bound on generated ticks; beyond it the domain is too extreme for
/// round steps and only the endpoints are returned.
const MAX_TICKS: i64 = 10_000;

/// Linear mapping from `[domain_min, domain_max]` to `[range_min, range_max]`.
///
/// Built once from the unfiltered dataset; filtering never touches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain `[0, max]` with a fallback of `[0, 1]` when no finite positive
    /// maximum exists (empty or all-NaN data).
    pub fn from_max(max: Option<f64>, range_max: f64) -> Self {
        let top = match max {
            Some(m) if m.is_finite() && m > 0.0 => m,
            _ => 1.0,
        };
        Self::new((0.0, top), (0.0, range_max))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a data value to the output range. NaN stays NaN.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        if count == 0 || stop.is_nan() || stop <= start {
            return vec![start];
        }

        let step = tick_step(start, stop, count);
        if !step.is_finite() || step <= 0.0 {
            return vec![start, stop];
        }
        if step >= 1.0 {
            let lo = (start / step).ceil() as i64;
            let hi = (stop / step).floor() as i64;
            if hi - lo > MAX_TICKS {
                return vec![start, stop];
            }
            (lo..=hi).map(|k| k as f64 * step).collect()
        } else {
            // Divide by the inverse step so ticks like 0.3 come out exact.
            let inv = (1.0 / step).round();
            if !inv.is_finite() {
                return vec![start, stop];
            }
            let lo = (start * inv).ceil() as i64;
            let hi = (stop * inv).floor() as i64;
            if hi - lo > MAX_TICKS {
                return vec![start, stop];
            }
            (lo..=hi).map(|k| k as f64 / inv).collect()
        }
    }
}

/// Tick spacing of 1, 2, 5 or 10 times a power of ten.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Axis label for a percentage tick, e.g. `"25%"`.
pub fn percent_label(value: f64) -> String {
    format!("{value}%")
}
