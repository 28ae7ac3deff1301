//! Track CSV mapper
//!
//! Reads song metadata rows from a CSV export and maps them into
//! [`TrackRecord`]s. The parse policy is deliberately lossy: header matching
//! tolerates case/whitespace drift, missing columns resolve to defaults, and
//! malformed cells decode to zero/empty instead of erroring. Rows without an
//! id are dropped after parsing. The reader is lazy, non-restartable, and
//! truncates at a fixed record cap regardless of file size.

use crate::error::Result;
use serde_json::{json, Map, Value};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Default cap on the number of records read from a CSV source.
pub const DEFAULT_TRACK_CAP: usize = 1000;

/// One song from the CSV source, ready to be upserted as a catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    /// Item id, taken verbatim from the `track_id` column
    pub id: String,
    pub song: String,
    pub artist: String,
    pub album: Option<String>,
    pub popularity: i64,
    pub danceability: f64,
}

impl TrackRecord {
    /// Property values map for the upsert request.
    pub fn values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("Song".to_string(), json!(self.song));
        values.insert("Artist".to_string(), json!(self.artist));
        values.insert(
            "Album".to_string(),
            self.album.as_deref().map_or(Value::Null, |a| json!(a)),
        );
        values.insert("Popularity".to_string(), json!(self.popularity));
        values.insert("Danceability".to_string(), json!(self.danceability));
        values
    }
}

/// Normalize a CSV header for matching: trim, lowercase, spaces to
/// underscores.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Column positions resolved from the normalized header row.
///
/// Any column may be absent; its fields then decode to defaults (and rows
/// lose their id entirely when the id column is missing, so nothing is
/// yielded).
#[derive(Debug, Default, Clone, Copy)]
struct Columns {
    id: Option<usize>,
    song: Option<usize>,
    artist: Option<usize>,
    album: Option<usize>,
    popularity: Option<usize>,
    danceability: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Self {
        let mut columns = Self::default();

        for (index, header) in headers.iter().enumerate() {
            match normalize_header(header).as_str() {
                "track_id" => columns.id = Some(index),
                "track_name" => columns.song = Some(index),
                "track_artist" => columns.artist = Some(index),
                "track_album_name" => columns.album = Some(index),
                "track_popularity" | "track_pop" => columns.popularity = Some(index),
                "danceability" => columns.danceability = Some(index),
                _ => {},
            }
        }

        columns
    }
}

/// Lazy reader over the track CSV, capped at a fixed number of records.
///
/// The cap counts parsed rows, so rows later dropped for a blank id still
/// consume it.
pub struct TrackReader {
    records: csv::StringRecordsIntoIter<File>,
    columns: Columns,
    remaining: usize,
}

impl TrackReader {
    /// Open a CSV file with the default record cap.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_cap(path, DEFAULT_TRACK_CAP)
    }

    /// Open a CSV file with an explicit record cap.
    pub fn with_cap<P: AsRef<Path>>(path: P, cap: usize) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;

        let columns = Columns::resolve(reader.headers()?);
        debug!(path = %path.as_ref().display(), ?columns, "Resolved CSV columns");

        Ok(Self {
            records: reader.into_records(),
            columns,
            remaining: cap,
        })
    }

    fn field<'a>(&self, record: &'a csv::StringRecord, index: Option<usize>) -> &'a str {
        index.and_then(|i| record.get(i)).unwrap_or("")
    }

    fn map_record(&self, record: &csv::StringRecord) -> TrackRecord {
        let album = self.field(record, self.columns.album);

        TrackRecord {
            id: self.field(record, self.columns.id).to_string(),
            song: self.field(record, self.columns.song).to_string(),
            artist: self.field(record, self.columns.artist).to_string(),
            album: if album.is_empty() {
                None
            } else {
                Some(album.to_string())
            },
            // Lossy by design: malformed numbers decode to zero
            popularity: self
                .field(record, self.columns.popularity)
                .trim()
                .parse()
                .unwrap_or(0),
            danceability: self
                .field(record, self.columns.danceability)
                .trim()
                .parse()
                .unwrap_or(0.0),
        }
    }
}

impl Iterator for TrackReader {
    type Item = TrackRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining == 0 {
                return None;
            }

            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    // Best-effort parse: a bad row still consumes the cap
                    debug!(error = %e, "Skipping malformed CSV row");
                    self.remaining -= 1;
                    continue;
                },
            };

            self.remaining -= 1;

            let track = self.map_record(&record);
            if track.id.trim().is_empty() {
                debug!("Skipping row with blank track id");
                continue;
            }

            return Some(track);
        }
    }
}
