//! Track segmentation: aligning the event log with the capture and cutting
//! it at detected silence gaps.
//!
//! The pass runs as a small state machine: align the clocks, scan playing
//! events in order, then finish as `Complete`, `NoAlignment` or `Aborted`.
//! The segment list is fully materialized before anything is encoded, so an
//! undetected boundary can never corrupt downstream durations.

use log::{info, warn};

use crate::cancel::CancelToken;
use crate::error::SplitError;
use crate::events::{TimestampEvent, TrackInfo};
use crate::silence::SilenceLocator;
use crate::time::{Ticks, fmt_time};
use crate::wav::WavReader;

/// A contiguous span of the capture assigned to one logical track.
///
/// Metadata belongs to the track still playing up to the closing boundary,
/// i.e. the event *before* the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    pub start: Ticks,
    pub duration: Ticks,
    pub info: Option<TrackInfo>,
}

/// Outcome of a segmentation pass. Only `Complete` may be encoded.
#[derive(Debug)]
pub enum Segmentation {
    /// Every boundary resolved to a silence gap.
    Complete(Vec<TrackSegment>),
    /// No playing event at or after the creation-time hint; nothing to cut.
    NoAlignment,
    /// One or more boundaries had no silence gap within the look-back
    /// bound. Nothing is encoded: a missed boundary shifts every later
    /// track, so the policy is succeed completely or write nothing.
    Aborted { missing: usize },
}

/// Cut the capture into track segments guided by the event log.
///
/// `ctime_hint` is the wall-clock creation time of the capture; events
/// before it are ignored. The first playing event at or after the hint
/// becomes the effective recording start (one-time drift correction between
/// the poller's clock and the capture device), and all later event times are
/// rebased onto it.
pub fn segment_tracks(
    wav: &mut WavReader,
    events: &[TimestampEvent],
    ctime_hint: f64,
    locator: &SilenceLocator,
    cancel: &CancelToken,
) -> Result<Segmentation, SplitError> {
    let total = wav.total_secs();
    let end = Ticks::from_secs_ceil(total);

    // AligningClock: first event at or after the hint. The log is sorted.
    let start_idx = events.partition_point(|e| e.time < ctime_hint);

    let mut origin = ctime_hint;
    let mut first = true;
    let mut segments: Vec<TrackSegment> = Vec::new();
    let mut open_start = Ticks::ZERO;
    let mut open_info: Option<TrackInfo> = None;
    let mut missing = 0usize;
    let mut closed_at_eof = false;

    for event in &events[start_idx..] {
        if !event.is_playing {
            continue;
        }
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }
        if first {
            info!("adjusting start time by {:.2} s", event.time - origin);
            origin = event.time;
        }
        let rel = event.time - origin;
        info!("{} {}", fmt_time(rel), event.info.display());

        if rel > total {
            // The capture ended before the log did; close the open segment
            // at the end of the file and stop.
            info!("  end of WAV file");
            segments.push(TrackSegment {
                start: open_start,
                duration: end - open_start,
                info: open_info.take(),
            });
            closed_at_eof = true;
            break;
        }

        if !first {
            match locator.find_silence_before(wav, rel)? {
                Some(at) => {
                    info!(
                        "  silence gap at {} ({:+.2} s)",
                        fmt_time(at.as_secs_f64()),
                        at.as_secs_f64() - rel
                    );
                    segments.push(TrackSegment {
                        start: open_start,
                        duration: at - open_start,
                        info: open_info.take(),
                    });
                    open_start = at;
                }
                None => {
                    // Keep scanning so every missed boundary gets reported,
                    // but the pass as a whole is already lost.
                    warn!("  no silence gap found before {}", fmt_time(rel));
                    missing += 1;
                }
            }
        }

        open_info = Some(event.info.clone());
        first = false;
    }

    if first {
        return Ok(Segmentation::NoAlignment);
    }
    if !closed_at_eof {
        segments.push(TrackSegment {
            start: open_start,
            duration: end - open_start,
            info: open_info.take(),
        });
    }
    if missing > 0 {
        return Ok(Segmentation::Aborted { missing });
    }
    Ok(Segmentation::Complete(segments))
}
