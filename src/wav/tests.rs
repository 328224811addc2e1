use std::fs;

use tempfile::tempdir;

use super::*;
use crate::testutil::write_wav;
use crate::time::Ticks;

#[test]
fn open_reads_header_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.wav");
    // 2 s of stereo at 8 kHz.
    write_wav(&path, 8000, 2, &vec![0i16; 8000 * 2 * 2]);

    let wav = WavReader::open(&path).unwrap();
    assert_eq!(
        wav.format(),
        PcmFormat {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
        }
    );
    assert_eq!(wav.total_secs(), 2.0);
}

#[test]
fn open_rejects_truncated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.wav");
    fs::write(&path, b"RIFF").unwrap();

    match WavReader::open(&path) {
        Err(SplitError::Format { reason, .. }) => assert!(reason.contains("44-byte")),
        other => panic!("expected format error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn open_rejects_non_16_bit_pcm() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("eight.wav");
    write_wav(&path, 8000, 1, &[0i16; 100]);
    // Patch bits-per-sample to 8.
    let mut bytes = fs::read(&path).unwrap();
    bytes[34] = 8;
    fs::write(&path, bytes).unwrap();

    assert!(matches!(
        WavReader::open(&path),
        Err(SplitError::Format { .. })
    ));
}

#[test]
fn read_samples_covers_exact_frame_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.wav");
    let samples: Vec<i16> = (0..8000).map(|i| (i % 100) as i16).collect();
    write_wav(&path, 8000, 1, &samples);

    let mut wav = WavReader::open(&path).unwrap();
    // One tick at 8 kHz is exactly 1000 frames.
    let window = wav.read_samples(Ticks::new(2), Ticks::new(1)).unwrap();
    assert_eq!(window.len(), 1000);
    assert_eq!(window[0], samples[2000]);
    assert_eq!(window[999], samples[2999]);
}

#[test]
fn read_past_end_returns_short_buffer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.wav");
    write_wav(&path, 8000, 1, &[7i16; 8500]);

    let mut wav = WavReader::open(&path).unwrap();
    // Window starting at tick 8 (1 s) only has 500 frames left.
    let tail = wav.read_samples(Ticks::new(8), Ticks::new(8)).unwrap();
    assert_eq!(tail.len(), 500);
    // Entirely past the end: empty, not an error.
    let past = wav.read_raw_bytes(Ticks::new(100), Ticks::new(1)).unwrap();
    assert!(past.is_empty());
}
