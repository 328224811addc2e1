//! Quantized time arithmetic on 1/8-second ticks.
//!
//! Boundary math runs on integer ticks so repeated runs produce
//! byte-identical segment boundaries. Floating point only appears at the
//! edges, where wall-clock event times enter the pipeline.

use std::ops::{Add, Sub};

/// Ticks per second; one tick is also the silence analysis window length.
pub const TICKS_PER_SEC: i64 = 8;

/// A point in (or span of) audio time, counted in 1/8-second ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticks(i64);

impl Ticks {
    pub const ZERO: Ticks = Ticks(0);

    pub const fn new(ticks: i64) -> Self {
        Ticks(ticks)
    }

    /// Quantize down to the tick at or before `secs`.
    pub fn from_secs_floor(secs: f64) -> Self {
        Ticks((secs * TICKS_PER_SEC as f64).floor() as i64)
    }

    /// Quantize up to the tick at or after `secs`.
    pub fn from_secs_ceil(secs: f64) -> Self {
        Ticks((secs * TICKS_PER_SEC as f64).ceil() as i64)
    }

    pub fn index(self) -> i64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / TICKS_PER_SEC as f64
    }

    /// Sample frames covered at `sample_rate`, floored.
    ///
    /// Equivalent to `floor(secs * rate)` computed exactly: `ticks * rate`
    /// stays in integers, so no drift accumulates across a long file.
    pub fn frames(self, sample_rate: u32) -> i64 {
        self.0 * sample_rate as i64 / TICKS_PER_SEC
    }
}

impl Add for Ticks {
    type Output = Ticks;
    fn add(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Ticks;
    fn sub(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 - rhs.0)
    }
}

/// Format a duration as `[h:]mm:ss.cc`, hours only when nonzero and minutes
/// shown (two-digit) once hours or minutes are present.
///
/// Works on rounded centiseconds so values like `3725.1` do not lose a
/// centisecond to binary float representation.
pub fn fmt_time(seconds: f64) -> String {
    let centis = (seconds * 100.0).round() as i64;
    let h = centis / 360_000;
    let m = centis / 6000 % 60;
    let s = centis / 100 % 60;
    let cc = centis % 100;

    let mut parts: Vec<String> = Vec::new();
    if h > 0 {
        parts.push(format!("{}", h));
    }
    if h > 0 || m > 0 {
        parts.push(format!("{:02}", m));
    }
    parts.push(format!("{:02}.{:02}", s, cc));
    parts.join(":")
}
