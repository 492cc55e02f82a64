use crate::game::lane::LaneRegistry;
use crate::game::note::{Note, SPECIAL_LANE, SUBTYPE_DOUBLE_SCORE};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    NotFound(PathBuf),
    LaneNotFound { lane: String, line: usize },
}

impl From<io::Error> for ChartError {
    fn from(err: io::Error) -> Self {
        ChartError::Io(err)
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "IO Error: {}", e),
            ChartError::NotFound(path) => write!(f, "Level File Not Found: {:?}", path),
            ChartError::LaneNotFound { lane, line } => {
                write!(f, "Row {} references unregistered lane '{}'", line, lane)
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Parsed level file: the lane table plus every note in file order.
///
/// Immutable once loaded; sessions copy the notes out and share the chart
/// behind an `Arc`. File order matters: the last note in the list is the one
/// whose scroll position decides the lose condition.
#[derive(Clone, Debug, Default)]
pub struct ChartData {
    pub lanes: LaneRegistry,
    pub notes: Vec<Note>,
}

impl ChartData {
    pub fn load(path: impl AsRef<Path>) -> Result<ChartData, ChartError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChartError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let chart = ChartData::parse(&text)?;
        info!(
            "Loaded chart '{}': {} lanes, {} notes.",
            path.display(),
            chart.lanes.len(),
            chart.notes.len()
        );
        Ok(chart)
    }

    /// Parses the row-oriented level format. Lane rows register positions;
    /// note rows must name an already-registered lane. Rows that do not
    /// match either 3-field shape are skipped with a warning; an unknown
    /// note type becomes a Special note carrying that type string verbatim.
    pub fn parse(text: &str) -> Result<ChartData, ChartError> {
        let mut lanes = LaneRegistry::new();
        let mut notes: Vec<Note> = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let fields: Vec<&str> = row.split(',').map(str::trim).collect();
            if fields.len() != 3 {
                warn!("Malformed chart row {}: '{}', skipping.", line_no, row);
                continue;
            }

            if fields[0] == "Lane" {
                let Ok(x) = fields[2].parse::<i32>() else {
                    warn!("Malformed lane position on row {}: '{}', skipping.", line_no, row);
                    continue;
                };
                lanes.set(fields[1], x);
                continue;
            }

            let Ok(spawn_frame) = fields[2].parse::<u32>() else {
                warn!("Malformed spawn frame on row {}: '{}', skipping.", line_no, row);
                continue;
            };
            let note = match fields[1] {
                "Normal" => Note::normal(fields[0], require_lane(&lanes, fields[0], line_no)?, spawn_frame),
                "Hold" => Note::hold(fields[0], require_lane(&lanes, fields[0], line_no)?, spawn_frame),
                "Bomb" => Note::bomb(fields[0], require_lane(&lanes, fields[0], line_no)?, spawn_frame),
                subtype => {
                    let subtype = if subtype == "DoubleScore" { SUBTYPE_DOUBLE_SCORE } else { subtype };
                    Note::special(subtype, require_lane(&lanes, SPECIAL_LANE, line_no)?, spawn_frame)
                }
            };
            notes.push(note);
        }

        Ok(ChartData { lanes, notes })
    }
}

fn require_lane(lanes: &LaneRegistry, name: &str, line: usize) -> Result<i32, ChartError> {
    lanes
        .get(name)
        .ok_or_else(|| ChartError::LaneNotFound { lane: name.to_string(), line })
}
