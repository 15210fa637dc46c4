use serde::Serialize;
use std::fmt;

/// Identifies which endpoint produced a result. Also keys local fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    Status,
    Season,
    Districts,
    Events,
    Teams,
    Schedule,
    Hybrid,
    Matches,
    Scores,
    Alliances,
    Rankings,
}

impl FrameType {
    pub const ALL: [FrameType; 11] = [
        FrameType::Status,
        FrameType::Season,
        FrameType::Districts,
        FrameType::Events,
        FrameType::Teams,
        FrameType::Schedule,
        FrameType::Hybrid,
        FrameType::Matches,
        FrameType::Scores,
        FrameType::Alliances,
        FrameType::Rankings,
    ];

    /// Tag recorded in the envelope's `frame_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameType::Status => "status",
            FrameType::Season => "season",
            FrameType::Districts => "districts",
            FrameType::Events => "events",
            FrameType::Teams => "teams",
            FrameType::Schedule => "schedule",
            FrameType::Hybrid => "hybrid",
            FrameType::Matches => "matches",
            FrameType::Scores => "scores",
            FrameType::Alliances => "alliances",
            FrameType::Rankings => "rankings",
        }
    }

    /// API command the frame type is served from. The hybrid schedule lives under `schedule`.
    pub fn command(&self) -> &'static str {
        match self {
            FrameType::Hybrid => "schedule",
            other => other.as_str(),
        }
    }

    /// Keys walked from the payload root down to the objects that become rows.
    /// Empty means the root object itself is the only row.
    pub fn record_path(&self) -> &'static [&'static str] {
        match self {
            FrameType::Status => &[],
            FrameType::Season => &["frcChampionships"],
            FrameType::Districts => &["districts"],
            FrameType::Events => &["Events"],
            FrameType::Teams => &["teams"],
            FrameType::Schedule | FrameType::Hybrid => &["Schedule", "Teams"],
            FrameType::Matches => &["Matches", "Teams"],
            FrameType::Scores => &["MatchScores", "Alliances"],
            FrameType::Alliances => &["Alliances"],
            FrameType::Rankings => &["Rankings"],
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Json,
    Xml,
}

impl TextFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TextFormat::Json => "json",
            TextFormat::Xml => "xml",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            TextFormat::Json => "application/json",
            TextFormat::Xml => "application/xml",
        }
    }
}
