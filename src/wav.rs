//! Fixed-layout WAV container access.
//!
//! The capture tool writes plain single-chunk PCM WAV, so the header is read
//! at fixed offsets rather than walking RIFF chunks:
//!
//! | offset | size | field            |
//! |--------|------|------------------|
//! | 22     | 2    | channel count    |
//! | 24     | 4    | sample rate (Hz) |
//! | 28     | 4    | bytes per second |
//! | 32     | 2    | block align      |
//! | 34     | 2    | bits per sample  |
//! | 44     | —    | PCM data         |
//!
//! All fields are little-endian. Only 16-bit signed PCM is accepted.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::SplitError;
use crate::time::Ticks;

/// Start of PCM data in the assumed single-chunk layout.
pub const DATA_OFFSET: u64 = 44;

/// PCM parameters handed through to the encoder unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

/// Random-access reader over one opened capture. Immutable once opened
/// except for the seek position of the underlying handle.
pub struct WavReader {
    file: File,
    channels: u16,
    sample_rate: u32,
    bytes_per_second: u32,
    bytes_per_sample: u16,
    total_secs: f64,
}

impl WavReader {
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let format_err = |reason: &str| SplitError::Format {
            path: PathBuf::from(path),
            reason: reason.to_string(),
        };

        let mut file = File::open(path)?;
        let mut header = [0u8; DATA_OFFSET as usize];
        file.read_exact(&mut header)
            .map_err(|_| format_err("file shorter than the 44-byte WAV header"))?;

        let channels = u16::from_le_bytes([header[22], header[23]]);
        let sample_rate = u32::from_le_bytes([header[24], header[25], header[26], header[27]]);
        let bytes_per_second = u32::from_le_bytes([header[28], header[29], header[30], header[31]]);
        let bits_per_sample = u16::from_le_bytes([header[34], header[35]]);
        if bits_per_sample != 16 {
            return Err(format_err("only 16-bit signed PCM is supported"));
        }
        if channels == 0 || sample_rate == 0 || bytes_per_second == 0 {
            return Err(format_err("zeroed format fields in WAV header"));
        }

        let data_len = file.metadata()?.len().saturating_sub(DATA_OFFSET);
        let total_secs = data_len as f64 / bytes_per_second as f64;

        Ok(Self {
            file,
            channels,
            sample_rate,
            bytes_per_second,
            bytes_per_sample: bits_per_sample / 8,
            total_secs,
        })
    }

    pub fn format(&self) -> PcmFormat {
        PcmFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bytes_per_sample * 8,
        }
    }

    /// Total audio length in seconds, from file size. The file is static for
    /// the lifetime of the reader, so this is computed once at open.
    pub fn total_secs(&self) -> f64 {
        self.total_secs
    }

    fn block_align(&self) -> u64 {
        self.bytes_per_sample as u64 * self.channels as u64
    }

    /// Read the raw sample bytes for `duration` starting at `start`.
    ///
    /// The seek offset is `floor(start_secs * rate)` frames, computed in
    /// integer tick arithmetic. A read past the end of the file returns a
    /// short buffer rather than an error.
    pub fn read_raw_bytes(&mut self, start: Ticks, duration: Ticks) -> Result<Vec<u8>, SplitError> {
        let frame = start.frames(self.sample_rate).max(0) as u64;
        self.file
            .seek(SeekFrom::Start(DATA_OFFSET + frame * self.block_align()))?;

        let frames = duration.frames(self.sample_rate).max(0) as u64;
        let mut buf = vec![0u8; (frames * self.block_align()) as usize];
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.file.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        buf.truncate(filled);
        Ok(buf)
    }

    /// Decoded variant of [`read_raw_bytes`](Self::read_raw_bytes):
    /// interleaved signed 16-bit samples across all channels.
    pub fn read_samples(&mut self, start: Ticks, duration: Ticks) -> Result<Vec<i16>, SplitError> {
        let raw = self.read_raw_bytes(start, duration)?;
        Ok(raw
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect())
    }
}

#[cfg(test)]
mod tests;
