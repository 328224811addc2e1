//! One full split run: segment everything, then encode file by file.
//!
//! The two passes are strictly ordered. Segmentation is all-or-nothing; a
//! capture whose boundaries cannot all be resolved writes no files at all.
//! Encoding is fail-fast: an encoder error stops the run, but tracks already
//! written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use log::{info, warn};

use crate::cancel::CancelToken;
use crate::config::Settings;
use crate::encode::Encoder;
use crate::error::SplitError;
use crate::events::TimestampEvent;
use crate::segment::{Segmentation, segment_tracks};
use crate::silence::SilenceLocator;
use crate::wav::WavReader;

/// Outcome of processing a single capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// All segments encoded.
    Encoded(usize),
    /// No playing event lined up with the capture; nothing written.
    NoAlignment,
    /// Some boundaries had no silence gap; nothing written.
    SilenceIncomplete { missing: usize },
}

/// Split one capture against the loaded event log.
pub fn split_file(
    wav_path: &Path,
    events: &[TimestampEvent],
    ctime_hint: Option<f64>,
    settings: &Settings,
    encoder: &dyn Encoder,
    cancel: &CancelToken,
) -> Result<RunStatus, SplitError> {
    let mut wav = WavReader::open(wav_path)?;
    let hint = match ctime_hint {
        Some(t) => t,
        None => file_creation_time(wav_path)?,
    };
    info!("{}: capture created at {hint:.0}", wav_path.display());

    let locator = SilenceLocator::new(&settings.silence);
    let segments = match segment_tracks(&mut wav, events, hint, &locator, cancel)? {
        Segmentation::Complete(segments) => segments,
        Segmentation::NoAlignment => {
            warn!(
                "{}: no playing event at or after the capture creation time",
                wav_path.display()
            );
            return Ok(RunStatus::NoAlignment);
        }
        Segmentation::Aborted { missing } => {
            warn!(
                "{}: silence gaps incomplete ({missing} missing), skipped encoding",
                wav_path.display()
            );
            return Ok(RunStatus::SilenceIncomplete { missing });
        }
    };

    // The directory appears only once segmentation has fully succeeded.
    let out_dir = output_dir(&settings.output.dir, wav_path);
    fs::create_dir_all(&out_dir)?;
    let format = wav.format();
    for (i, segment) in segments.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }
        info!("encoding {} of {}", i + 1, segments.len());
        let raw = wav.read_raw_bytes(segment.start, segment.duration)?;
        let out_path = out_dir.join(format!("{:04}.flac", i + 1));
        encoder.encode(&raw, format, segment.info.as_ref(), &out_path)?;
    }
    Ok(RunStatus::Encoded(segments.len()))
}

/// `<base>/<capture basename without extension>`.
fn output_dir(base: &Path, wav_path: &Path) -> PathBuf {
    let stem = wav_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("capture");
    base.join(stem)
}

/// Creation time of the capture as unix seconds, falling back to the
/// modification time on filesystems that do not record birth time.
pub fn file_creation_time(path: &Path) -> Result<f64, SplitError> {
    let meta = fs::metadata(path)?;
    let created = meta.created().or_else(|_| meta.modified())?;
    Ok(created
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0))
}
