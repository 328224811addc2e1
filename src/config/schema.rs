use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wavsplit/config.toml` or
/// `~/.config/wavsplit/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WAVSPLIT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub silence: SilenceSettings,
    pub encoder: EncoderSettings,
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            silence: SilenceSettings::default(),
            encoder: EncoderSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SilenceSettings {
    /// Mean absolute 16-bit sample magnitude below which a 0.125 s window
    /// counts as silent. Calibrated against the mean-absolute metric, not
    /// RMS.
    pub threshold: f64,
    /// How far before a reported track change to search for the gap
    /// (seconds).
    pub lookback_secs: u32,
}

impl Default for SilenceSettings {
    fn default() -> Self {
        Self {
            threshold: 5.0,
            lookback_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    /// Encoder executable; resolved via `PATH` when not absolute.
    pub program: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            program: "flac".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory that receives one subdirectory per input capture.
    pub dir: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
        }
    }
}
