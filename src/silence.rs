//! Windowed loudness analysis and the backward silence search.

use crate::config::SilenceSettings;
use crate::error::SplitError;
use crate::time::{TICKS_PER_SEC, Ticks};
use crate::wav::WavReader;

/// Analysis window: one tick, 0.125 s.
const WINDOW: Ticks = Ticks::new(1);

/// Mean absolute sample magnitude over a window, across all channels.
///
/// Deliberately not RMS or dBFS: the silence threshold is calibrated against
/// this exact scalar.
pub fn volume(samples: &[i16]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: u64 = samples.iter().map(|&s| (s as i64).unsigned_abs()).sum();
    sum as f64 / samples.len() as f64
}

/// Backward search for the silence gap preceding a reported track change.
pub struct SilenceLocator {
    threshold: f64,
    lookback_ticks: i64,
}

impl SilenceLocator {
    pub fn new(settings: &SilenceSettings) -> Self {
        Self {
            threshold: settings.threshold,
            lookback_ticks: settings.lookback_secs as i64 * TICKS_PER_SEC,
        }
    }

    /// Find the nearest window at or before `candidate_secs` whose volume is
    /// strictly below the threshold.
    ///
    /// The candidate is quantized down to a tick so repeated runs align
    /// their windows identically. The scan walks back one tick at a time,
    /// through the look-back bound inclusive; windows before time zero are
    /// skipped. `None` means no gap qualified, which the segmenter treats as
    /// a policy decision, not an error.
    pub fn find_silence_before(
        &self,
        wav: &mut WavReader,
        candidate_secs: f64,
    ) -> Result<Option<Ticks>, SplitError> {
        let candidate = Ticks::from_secs_floor(candidate_secs);
        for step in 0..=self.lookback_ticks {
            let at = candidate - Ticks::new(step);
            if at < Ticks::ZERO {
                continue;
            }
            if volume(&wav.read_samples(at, WINDOW)?) < self.threshold {
                return Ok(Some(at));
            }
        }
        Ok(None)
    }
}
