// ---------------------------------------------------------------------------
// Tweened values
// ---------------------------------------------------------------------------

/// Values that can be blended between two endpoints.
pub trait Interpolate {
    /// `t = 0` yields `self`, `t = 1` yields `to`.
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// Symmetric cubic easing.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A value moving from `from` to `to` over `duration` seconds from `start`.
///
/// Times come from the caller's frame clock, so nothing here sleeps or
/// schedules; a transition is just sampled when a frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<G> {
    from: G,
    to: G,
    start: f64,
    duration: f64,
}

impl<G: Interpolate + Clone> Tween<G> {
    /// A tween already at rest on `value`.
    pub fn settled(value: G) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn new(from: G, to: G, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ease_cubic_in_out((now - self.start) / self.duration)
    }

    pub fn sample(&self, now: f64) -> G {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to.clone()
        } else {
            self.from.interpolate(&self.to, t)
        }
    }

    /// Restart toward a new target from wherever the value is at `now`.
    pub fn retarget(&mut self, to: G, now: f64, duration: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn target(&self) -> &G {
        &self.to
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}
