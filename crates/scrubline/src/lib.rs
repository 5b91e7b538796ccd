//! Scrubline: internal dependency-free keyframe interpolation library.
//!
//! Animations here are not clocked by wall time. A [`Track`] is sampled by a
//! normalized progress value in `[0, 1]` (typically derived from a scroll
//! position), and a [`Tween`] advances by a fixed amount per animation frame.
//!
//! - A track is an ordered set of non-overlapping eased segments.
//! - Sampling clamps: before the first segment the track holds its initial
//!   value, between segments it holds the previous segment's end value, and
//!   past the last segment it holds the final value. There is no overshoot.
//! - Easing functions map `[0, 1] -> [0, 1]` with fixed endpoints.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Easing curve applied to a segment's local progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out ("power1.inOut").
    QuadInOut,
    /// Quadratic ease-out ("power2.out" applied to a quadratic curve).
    QuadOut,
}

impl Ease {
    /// Maps local progress `t` in `[0, 1]` through the curve.
    /// Inputs are clamped, so `apply(0) == 0` and `apply(1) == 1` always hold.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// One eased keyframe span inside a track.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Progress value where the segment starts.
    pub start: f32,
    /// Progress value where the segment ends. Must be > `start`.
    pub end: f32,
    /// Value at `start`.
    pub from: f32,
    /// Value at `end`.
    pub to: f32,
    pub ease: Ease,
}

impl Segment {
    #[inline]
    fn sample(&self, progress: f32) -> f32 {
        let local = (progress - self.start) / (self.end - self.start);
        lerp(self.from, self.to, self.ease.apply(local))
    }
}

/// A scrubbed animation channel for a single scalar property.
#[derive(Debug, Clone)]
pub struct Track {
    initial: f32,
    segments: Vec<Segment>,
}

impl Track {
    /// Starts building a track that rests at `initial` before any segment.
    pub fn builder(initial: f32) -> TrackBuilder {
        TrackBuilder {
            initial,
            cursor: initial,
            segments: Vec::new(),
        }
    }

    /// Value of the track at normalized `progress`. Progress outside `[0, 1]`
    /// is clamped.
    pub fn sample(&self, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        let mut value = self.initial;
        for seg in &self.segments {
            if progress < seg.start {
                break;
            }
            if progress < seg.end {
                return seg.sample(progress);
            }
            value = seg.to;
        }
        value
    }

    /// Value the track rests at before its first segment.
    #[inline]
    pub fn initial(&self) -> f32 {
        self.initial
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Builds a [`Track`] from consecutive `to` steps, carrying the previous end
/// value forward as each new segment's start value.
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    initial: f32,
    cursor: f32,
    segments: Vec<Segment>,
}

impl TrackBuilder {
    /// Appends a segment animating from the current value to `value` over the
    /// progress span `[start, end)`.
    ///
    /// Spans must be appended in order and must not overlap; out-of-order or
    /// degenerate spans are ignored rather than corrupting the track.
    pub fn to(mut self, value: f32, start: f32, end: f32, ease: Ease) -> Self {
        let prev_end = self.segments.last().map_or(f32::MIN, |s| s.end);
        if end <= start || start < prev_end {
            return self;
        }
        self.segments.push(Segment {
            start,
            end,
            from: self.cursor,
            to: value,
            ease,
        });
        self.cursor = value;
        self
    }

    pub fn build(self) -> Track {
        Track {
            initial: self.initial,
            segments: self.segments,
        }
    }
}

/// A frame-stepped progress value that runs toward 0 or 1 and eases on read.
///
/// `step()` is called once per animation frame; direction can flip mid-flight
/// and the tween reverses from wherever it currently is.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    t: f32,
    rate: f32,
    forward: bool,
    ease: Ease,
}

impl Tween {
    /// A tween resting at 0 that moves by `rate` per frame when stepped.
    pub fn new(rate: f32, ease: Ease) -> Self {
        Self {
            t: 0.0,
            rate,
            forward: false,
            ease,
        }
    }

    /// Sets the travel direction: `true` runs toward 1, `false` toward 0.
    pub fn run_to(&mut self, forward: bool) {
        self.forward = forward;
    }

    /// Advances one frame and returns the eased value in `[0, 1]`.
    pub fn step(&mut self) -> f32 {
        if self.forward {
            self.t = (self.t + self.rate).min(1.0);
        } else {
            self.t = (self.t - self.rate).max(0.0);
        }
        self.value()
    }

    /// Eased value at the current position, without advancing.
    #[inline]
    pub fn value(&self) -> f32 {
        self.ease.apply(self.t)
    }

    /// True once the tween has reached the end it is running toward.
    #[inline]
    pub fn settled(&self) -> bool {
        if self.forward {
            self.t >= 1.0
        } else {
            self.t <= 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::QuadInOut, Ease::QuadOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(Ease::QuadInOut.apply(-2.0), 0.0);
        assert_eq!(Ease::QuadInOut.apply(3.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        for ease in [Ease::Linear, Ease::QuadInOut, Ease::QuadOut] {
            let mut prev = ease.apply(0.0);
            for i in 1..=100 {
                let v = ease.apply(i as f32 / 100.0);
                assert!(v >= prev, "{ease:?} not monotonic at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn quad_in_out_midpoint() {
        assert!((Ease::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn track_holds_initial_before_first_segment() {
        let track = Track::builder(10.0)
            .to(20.0, 0.5, 1.0, Ease::Linear)
            .build();
        assert_eq!(track.sample(0.0), 10.0);
        assert_eq!(track.sample(0.49), 10.0);
    }

    #[test]
    fn track_interpolates_inside_segment() {
        let track = Track::builder(0.0).to(10.0, 0.0, 1.0, Ease::Linear).build();
        assert!((track.sample(0.25) - 2.5).abs() < 1e-6);
        assert!((track.sample(0.75) - 7.5).abs() < 1e-6);
    }

    #[test]
    fn track_holds_between_and_after_segments() {
        let track = Track::builder(0.0)
            .to(5.0, 0.0, 0.25, Ease::Linear)
            .to(-3.0, 0.75, 1.0, Ease::Linear)
            .build();
        // Gap between segments holds the previous end value.
        assert_eq!(track.sample(0.5), 5.0);
        // Past the end holds the final value.
        assert_eq!(track.sample(1.0), -3.0);
    }

    #[test]
    fn track_clamps_progress() {
        let track = Track::builder(1.0).to(2.0, 0.0, 1.0, Ease::Linear).build();
        assert_eq!(track.sample(-1.0), track.sample(0.0));
        assert_eq!(track.sample(9.0), track.sample(1.0));
    }

    #[test]
    fn track_never_overshoots_segment_targets() {
        let track = Track::builder(0.0)
            .to(1.0, 0.0, 0.5, Ease::QuadInOut)
            .to(0.2, 0.5, 1.0, Ease::QuadInOut)
            .build();
        for i in 0..=1000 {
            let v = track.sample(i as f32 / 1000.0);
            assert!((0.0..=1.0).contains(&v), "overshoot: {v}");
        }
    }

    #[test]
    fn builder_rejects_overlapping_spans() {
        let track = Track::builder(0.0)
            .to(1.0, 0.0, 0.5, Ease::Linear)
            .to(9.0, 0.25, 0.75, Ease::Linear) // overlaps, dropped
            .build();
        assert_eq!(track.segments().len(), 1);
        assert_eq!(track.sample(1.0), 1.0);
    }

    #[test]
    fn chained_segments_carry_values_forward() {
        let track = Track::builder(0.0)
            .to(4.0, 0.0, 0.5, Ease::Linear)
            .to(2.0, 0.5, 1.0, Ease::Linear)
            .build();
        // Second segment starts from the first segment's end value.
        assert!((track.sample(0.5) - 4.0).abs() < 1e-6);
        assert!((track.sample(0.75) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn tween_runs_both_directions() {
        let mut tw = Tween::new(0.25, Ease::Linear);
        tw.run_to(true);
        assert_eq!(tw.step(), 0.25);
        tw.step();
        tw.step();
        assert_eq!(tw.step(), 1.0);
        assert!(tw.settled());

        tw.run_to(false);
        assert!(!tw.settled());
        assert_eq!(tw.step(), 0.75);
    }

    #[test]
    fn tween_reverses_mid_flight() {
        let mut tw = Tween::new(0.1, Ease::Linear);
        tw.run_to(true);
        for _ in 0..3 {
            tw.step();
        }
        tw.run_to(false);
        let v = tw.step();
        assert!((v - 0.2).abs() < 1e-6);
    }
}
