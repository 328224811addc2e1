use std::env;
use std::path::PathBuf;

mod cancel;
mod config;
mod encode;
mod error;
mod events;
mod input;
mod run;
mod segment;
mod silence;
#[cfg(test)]
mod testutil;
mod time;
mod wav;

use log::{info, warn};

use cancel::CancelToken;
use config::Settings;
use encode::FlacEncoder;
use events::load_events;
use input::collect_wavs;
use run::{RunStatus, split_file};

const USAGE: &str = "usage: wavsplit <capture.wav | directory> [-t track.log] [-c ctime-hint]";

struct Opts {
    input: PathBuf,
    timestamps: PathBuf,
    ctime_hint: Option<f64>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Opts, String> {
    let mut input: Option<PathBuf> = None;
    let mut timestamps = PathBuf::from("track.log");
    let mut ctime_hint = None;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-t" | "--timestamps" => {
                let v = args.next().ok_or("missing value for --timestamps")?;
                timestamps = PathBuf::from(v);
            }
            "-c" | "--ctime-hint" => {
                let v = args.next().ok_or("missing value for --ctime-hint")?;
                ctime_hint = Some(
                    v.parse::<f64>()
                        .map_err(|_| format!("invalid ctime hint: {v}"))?,
                );
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}"));
            }
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    return Err("more than one input path given".to_string());
                }
            }
        }
    }

    Ok(Opts {
        input: input.ok_or("no input path given")?,
        timestamps,
        ctime_hint,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args(env::args().skip(1)).map_err(|e| format!("{e}\n{USAGE}"))?;
    let settings = Settings::load()?;
    settings.validate()?;

    let events = load_events(&opts.timestamps)?;
    if events.is_empty() {
        warn!("{}: no usable events in the log", opts.timestamps.display());
    }

    let files = collect_wavs(&opts.input);
    if files.is_empty() {
        return Err(format!("no WAV captures under {}", opts.input.display()).into());
    }

    let cancel = CancelToken::new();
    let encoder = FlacEncoder::new(settings.encoder.program.clone());
    for file in &files {
        let status = split_file(
            file,
            &events,
            opts.ctime_hint,
            &settings,
            &encoder,
            &cancel,
        )?;
        if let RunStatus::Encoded(n) = status {
            info!("{}: wrote {n} tracks", file.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(words: &[&str]) -> Result<Opts, String> {
        parse_args(words.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_args_applies_defaults() {
        let opts = parse(&["session.wav"]).unwrap();
        assert_eq!(opts.input, PathBuf::from("session.wav"));
        assert_eq!(opts.timestamps, PathBuf::from("track.log"));
        assert!(opts.ctime_hint.is_none());
    }

    #[test]
    fn parse_args_reads_options() {
        let opts = parse(&["-t", "events.log", "-c", "1700000000", "session.wav"]).unwrap();
        assert_eq!(opts.timestamps, PathBuf::from("events.log"));
        assert_eq!(opts.ctime_hint, Some(1_700_000_000.0));
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.wav", "b.wav"]).is_err());
        assert!(parse(&["--bogus", "a.wav"]).is_err());
        assert!(parse(&["-c", "not-a-number", "a.wav"]).is_err());
    }
}
