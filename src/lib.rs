//! Blocking client for the FIRST Robotics Competition event data API
//!
//! A [`Session`] carries credentials, season, output format and data source.
//! An [`FrcClient`] turns endpoint calls into conditional HTTP GETs (or local
//! fixture reads) and shapes the reply as a [`Frame`] or as raw JSON/XML text,
//! with the request metadata attached either way.
//!
//! # Examples
//!
//! ```rust,no_run
//! use frc_api::{Conditional, FrcClient, FrcError, Session, TeamsQuery};
//!
//! fn main() -> Result<(), FrcError> {
//!     let session = Session::new("username", "authorization-key")?.with_season(2017)?;
//!     let client = FrcClient::new()?;
//!
//!     let query = TeamsQuery {
//!         district: Some("PNW".to_string()),
//!         ..Default::default()
//!     };
//!     let response = client.teams(&session, &query, &Conditional::none())?;
//!     if let Some(teams) = response.as_table() {
//!         println!("{} teams, last modified {:?}", teams.len(), teams.attr.last_modified);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod session;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{ApiEndpoints, Config};
pub use data_fetcher::api::{FrcClient, HttpTransport, Transport, TransportResponse};
pub use data_fetcher::fixtures::{DirectoryFixtures, Fixture, FixtureStore};
pub use data_fetcher::models::{
    ApiResponse, Conditional, EventsQuery, Frame, FrameType, HybridQuery, MatchesQuery,
    RankingsQuery, RawResponse, ResponseEnvelope, Row, ScheduleQuery, ScoresQuery, TeamsQuery,
    TextFormat, TournamentLevel,
};
pub use data_fetcher::processors::{datetime_to_httpdate, httpdate_to_datetime, offset_httpdate};
pub use error::FrcError;
pub use logging::setup_logging;
pub use session::{IntoSeason, OutputFormat, Session, Source};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
