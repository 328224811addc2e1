//! Shared fixtures for tests: synthetic WAV captures and event logs.

use std::fs;
use std::path::Path;

use crate::events::{TimestampEvent, TrackInfo};

/// Write a minimal single-chunk 16-bit PCM WAV with the given interleaved
/// samples.
pub(crate) fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
    let block_align = 2 * channels;
    let bytes_per_second = sample_rate * block_align as u32;
    let data_len = (samples.len() * 2) as u32;

    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM integer
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&bytes_per_second.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

/// Mono signal of `secs` seconds at constant amplitude `level`, with silent
/// (all-zero) gaps of `gap_secs` starting at each time in `gaps`.
pub(crate) fn signal_with_gaps(
    sample_rate: u32,
    secs: f64,
    level: i16,
    gaps: &[f64],
    gap_secs: f64,
) -> Vec<i16> {
    let total = (secs * sample_rate as f64) as usize;
    let mut samples = vec![level; total];
    for &gap in gaps {
        let from = (gap * sample_rate as f64) as usize;
        let to = (((gap + gap_secs) * sample_rate as f64) as usize).min(total);
        samples[from..to].fill(0);
    }
    samples
}

pub(crate) fn playing_event(time: f64, title: &str) -> TimestampEvent {
    TimestampEvent {
        time,
        info: TrackInfo {
            title: title.to_string(),
            album: "Album".to_string(),
            artist: "Artist".to_string(),
        },
        is_playing: true,
    }
}

pub(crate) fn paused_event(time: f64) -> TimestampEvent {
    TimestampEvent {
        is_playing: false,
        ..playing_event(time, "paused")
    }
}
