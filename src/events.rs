//! Now-playing event log parsing.
//!
//! The poller appends one JSON object per line:
//! `{"time": <unix seconds>, "info": {"title", "album", "artist", "status"}}`.
//! Lines that fail to parse or lack a field are skipped silently; the poller
//! interleaves diagnostics into the same file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use crate::error::SplitError;

/// Track metadata attached to the segment the track occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub title: String,
    pub album: String,
    pub artist: String,
}

impl TrackInfo {
    /// `artist/album/title`, used for log lines.
    pub fn display(&self) -> String {
        format!("{}/{}/{}", self.artist, self.album, self.title)
    }
}

/// One observation from the now-playing poller, in wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampEvent {
    pub time: f64,
    pub info: TrackInfo,
    pub is_playing: bool,
}

#[derive(Deserialize)]
struct RawEvent {
    time: f64,
    info: RawInfo,
}

#[derive(Deserialize)]
struct RawInfo {
    title: String,
    album: String,
    artist: String,
    status: String,
}

/// Load the whole event log. The poller writes in time order, so the result
/// is assumed sorted.
pub fn load_events(path: &Path) -> Result<Vec<TimestampEvent>, SplitError> {
    let file = File::open(path)?;
    let mut events = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let Ok(raw) = serde_json::from_str::<RawEvent>(&line) else {
            continue;
        };
        events.push(TimestampEvent {
            time: raw.time,
            is_playing: raw.info.status == "Playing",
            info: TrackInfo {
                title: raw.info.title,
                album: raw.info.album,
                artist: raw.info.artist,
            },
        });
    }
    Ok(events)
}
