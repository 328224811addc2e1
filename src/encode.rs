//! External lossless encoder interface.
//!
//! The core never links an encoder; it pipes raw PCM into a subprocess (the
//! `flac` reference encoder by default) and blocks on its exit. The trait
//! keeps segmentation testable against a fake that spawns nothing.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::SplitError;
use crate::events::TrackInfo;
use crate::wav::PcmFormat;

/// Synchronous encode capability, called once per segment after the whole
/// segmentation pass has succeeded.
pub trait Encoder {
    fn encode(
        &self,
        raw: &[u8],
        format: PcmFormat,
        info: Option<&TrackInfo>,
        out_path: &Path,
    ) -> Result<(), SplitError>;
}

/// Drives the `flac` command line encoder over raw PCM on stdin.
pub struct FlacEncoder {
    program: String,
}

impl FlacEncoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_args(&self, format: PcmFormat, info: Option<&TrackInfo>, out_path: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(info) = info {
            for (tag, value) in [
                ("ARTIST", &info.artist),
                ("ALBUM", &info.album),
                ("TITLE", &info.title),
            ] {
                let value = value.trim();
                if !value.is_empty() {
                    args.push(format!("--tag={tag}={value}"));
                }
            }
        }
        args.push("--best".to_string());
        args.push(format!("--output-name={}", out_path.display()));
        args.push("--sign=signed".to_string());
        args.push(format!("--channels={}", format.channels));
        args.push("--endian=little".to_string());
        args.push(format!("--bps={}", format.bits_per_sample));
        args.push(format!("--sample-rate={}", format.sample_rate));
        args.push("--force-raw-format".to_string());
        args.push("--silent".to_string());
        args.push("-".to_string());
        args
    }
}

impl Encoder for FlacEncoder {
    fn encode(
        &self,
        raw: &[u8],
        format: PcmFormat,
        info: Option<&TrackInfo>,
        out_path: &Path,
    ) -> Result<(), SplitError> {
        let mut child = Command::new(&self.program)
            .args(self.build_args(format, info, out_path))
            .stdin(Stdio::piped())
            .spawn()?;

        // Dropping stdin closes the pipe so the encoder sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(raw)?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(SplitError::Encode {
                program: self.program.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn format() -> PcmFormat {
        PcmFormat {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
        }
    }

    #[test]
    fn args_pass_format_through_and_read_stdin() {
        let enc = FlacEncoder::new("flac");
        let args = enc.build_args(format(), None, &PathBuf::from("out/0001.flac"));
        assert!(args.contains(&"--channels=2".to_string()));
        assert!(args.contains(&"--sample-rate=44100".to_string()));
        assert!(args.contains(&"--bps=16".to_string()));
        assert!(args.contains(&"--force-raw-format".to_string()));
        assert_eq!(args.first().unwrap(), "--best");
        assert_eq!(args.last().unwrap(), "-");
    }

    #[test]
    fn args_tag_only_non_empty_fields() {
        let enc = FlacEncoder::new("flac");
        let info = TrackInfo {
            title: "  Song  ".to_string(),
            album: "".to_string(),
            artist: "Band".to_string(),
        };
        let args = enc.build_args(format(), Some(&info), &PathBuf::from("0001.flac"));
        assert!(args.contains(&"--tag=ARTIST=Band".to_string()));
        assert!(args.contains(&"--tag=TITLE=Song".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("--tag=ALBUM")));
        // Tags come before the positional stdin marker and output name.
        assert_eq!(args[0], "--tag=ARTIST=Band");
    }

    #[test]
    fn failing_program_maps_to_encode_error() {
        let enc = FlacEncoder::new("false");
        let err = enc
            .encode(&[], format(), None, &PathBuf::from("/dev/null"))
            .unwrap_err();
        match err {
            SplitError::Encode { program, .. } => assert_eq!(program, "false"),
            other => panic!("expected encode error, got {other:?}"),
        }
    }
}
