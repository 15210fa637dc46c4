//! Per-caller request settings: credentials, season, output format and data source.
//!
//! Every field is checked by exactly one validation function, which runs both
//! when a [`Session`] is built and whenever a field is reassigned. A setter that
//! fails leaves the session untouched.

use chrono::{Datelike, Local};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::constants::MIN_SEASON;
use crate::error::FrcError;

/// Shape of the value returned by every endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rows flattened into a [`crate::Frame`]
    #[default]
    Table,
    /// Raw JSON text plus envelope
    Json,
    /// Raw XML text plus envelope
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_output_format(s)
    }
}

/// Where data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Production,
    Staging,
    /// Bundled fixtures; no network traffic.
    Local,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Production => "production",
            Source::Staging => "staging",
            Source::Local => "local",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything accepted as a season: a year, a numeric string, or `None` for the current year.
pub trait IntoSeason {
    fn into_season(self) -> Result<Option<i32>, FrcError>;
}

impl IntoSeason for i32 {
    fn into_season(self) -> Result<Option<i32>, FrcError> {
        Ok(Some(self))
    }
}

impl IntoSeason for u16 {
    fn into_season(self) -> Result<Option<i32>, FrcError> {
        Ok(Some(i32::from(self)))
    }
}

impl IntoSeason for Option<i32> {
    fn into_season(self) -> Result<Option<i32>, FrcError> {
        Ok(self)
    }
}

impl IntoSeason for &str {
    fn into_season(self) -> Result<Option<i32>, FrcError> {
        let trimmed = self.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(FrcError::config_error(format!(
                "season must be a four digit year, got '{self}'"
            )));
        }
        trimmed
            .parse::<i32>()
            .map(Some)
            .map_err(|e| FrcError::config_error(format!("season '{self}' is not a year: {e}")))
    }
}

impl IntoSeason for String {
    fn into_season(self) -> Result<Option<i32>, FrcError> {
        self.as_str().into_season()
    }
}

/// Settings shared by every request a caller makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    key: String,
    season: i32,
    output_format: OutputFormat,
    source: Source,
}

impl Session {
    /// Creates a session for the current season, table output and the production server.
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Result<Self, FrcError> {
        Ok(Session {
            username: validate_username(username.into())?,
            key: validate_key(key.into())?,
            season: validate_season(None, current_year())?,
            output_format: OutputFormat::default(),
            source: Source::default(),
        })
    }

    pub fn with_season(mut self, season: impl IntoSeason) -> Result<Self, FrcError> {
        self.set_season(season)?;
        Ok(self)
    }

    pub fn with_output_format(mut self, format: &str) -> Result<Self, FrcError> {
        self.set_output_format(format)?;
        Ok(self)
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.set_source(source);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn season(&self) -> i32 {
        self.season
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn is_local(&self) -> bool {
        self.source == Source::Local
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), FrcError> {
        self.username = validate_username(username.into())?;
        Ok(())
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> Result<(), FrcError> {
        self.key = validate_key(key.into())?;
        Ok(())
    }

    /// Accepts a year, a numeric string, or `None` for the current year.
    pub fn set_season(&mut self, season: impl IntoSeason) -> Result<(), FrcError> {
        self.season = validate_season(season.into_season()?, current_year())?;
        Ok(())
    }

    /// Case-insensitive: `table` (or `dataframe`), `json`, `xml`.
    pub fn set_output_format(&mut self, format: &str) -> Result<(), FrcError> {
        self.output_format = parse_output_format(format)?;
        Ok(())
    }

    pub fn set_output_format_kind(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    /// Unrecognized values fall back to [`Source::Production`] with a warning.
    pub fn set_source(&mut self, source: &str) {
        self.source = parse_source(source);
    }

    pub fn set_source_kind(&mut self, source: Source) {
        self.source = source;
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

fn validate_username(username: String) -> Result<String, FrcError> {
    if username.trim().is_empty() {
        return Err(FrcError::config_error("username must be a non-empty string"));
    }
    Ok(username)
}

fn validate_key(key: String) -> Result<String, FrcError> {
    if key.trim().is_empty() {
        return Err(FrcError::config_error(
            "authorization key must be a non-empty string",
        ));
    }
    Ok(key)
}

/// `None` resolves to `current_year`; anything outside `[2015, current_year + 1]` fails.
pub fn validate_season(season: Option<i32>, current_year: i32) -> Result<i32, FrcError> {
    let season = season.unwrap_or(current_year);
    if (MIN_SEASON..=current_year + 1).contains(&season) {
        Ok(season)
    } else {
        Err(FrcError::config_error(format!(
            "season must be between {MIN_SEASON} and {}, got {season}",
            current_year + 1
        )))
    }
}

pub fn parse_output_format(format: &str) -> Result<OutputFormat, FrcError> {
    match format.trim().to_ascii_lowercase().as_str() {
        "table" | "dataframe" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "xml" => Ok(OutputFormat::Xml),
        _ => Err(FrcError::config_error(format!(
            "output format must be 'table', 'json', or 'xml' (case insensitive), got '{format}'"
        ))),
    }
}

/// Unknown sources degrade to production with a warning.
pub fn parse_source(source: &str) -> Source {
    match source.trim().to_ascii_lowercase().as_str() {
        "production" => Source::Production,
        "staging" => Source::Staging,
        "local" => Source::Local,
        other => {
            warn!(
                "Source '{other}' is not recognized; expected 'production', 'staging', or 'local'. Using 'production'."
            );
            Source::Production
        }
    }
}
