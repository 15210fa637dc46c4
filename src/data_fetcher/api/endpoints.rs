//! One method per FIRST API resource.
//!
//! Every method validates its arguments before touching the network or the
//! fixture store, then returns the shape chosen by the session's output format.

use tracing::instrument;

use super::client::FrcClient;
use crate::data_fetcher::models::queries::require_event;
use crate::data_fetcher::models::{
    ApiResponse, Conditional, EventsQuery, FrameType, HybridQuery, MatchesQuery, Params,
    RankingsQuery, ScheduleQuery, ScoresQuery, TeamsQuery,
};
use crate::error::FrcError;
use crate::session::Session;

impl FrcClient {
    /// API name, version and health.
    #[instrument(skip_all)]
    pub fn status(&self, session: &Session, conditional: &Conditional) -> Result<ApiResponse, FrcError> {
        self.get(session, FrameType::Status, &Params::new(), conditional)
    }

    /// Season summary; one row per championship event.
    #[instrument(skip_all)]
    pub fn season(&self, session: &Session, conditional: &Conditional) -> Result<ApiResponse, FrcError> {
        self.get(session, FrameType::Season, &Params::new(), conditional)
    }

    #[instrument(skip_all)]
    pub fn districts(
        &self,
        session: &Session,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        self.get(session, FrameType::Districts, &Params::new(), conditional)
    }

    #[instrument(skip_all)]
    pub fn events(
        &self,
        session: &Session,
        query: &EventsQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Events, &query.params(), conditional)
    }

    /// Teams listing. Without an explicit `page`, table output holds every page.
    #[instrument(skip_all)]
    pub fn teams(
        &self,
        session: &Session,
        query: &TeamsQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get_team_pages(session, query.params(), conditional)
    }

    /// Match schedule for one event; one row per team per match.
    #[instrument(skip_all, fields(event = %query.event))]
    pub fn schedule(
        &self,
        session: &Session,
        query: &ScheduleQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Schedule, &query.params(), conditional)
    }

    /// Schedule merged with results. Recorded under the `hybrid` frame type.
    #[instrument(skip_all, fields(event = %query.event))]
    pub fn hybrid(
        &self,
        session: &Session,
        query: &HybridQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Hybrid, &query.params(), conditional)
    }

    #[instrument(skip_all, fields(event = %query.event))]
    pub fn matches(
        &self,
        session: &Session,
        query: &MatchesQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Matches, &query.params(), conditional)
    }

    /// Detailed score breakdown; one row per alliance per match.
    #[instrument(skip_all, fields(event = %query.event))]
    pub fn scores(
        &self,
        session: &Session,
        query: &ScoresQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Scores, &query.params(), conditional)
    }

    /// Playoff alliances for one event.
    #[instrument(skip(self, session, conditional))]
    pub fn alliances(
        &self,
        session: &Session,
        event: &str,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        require_event(event)?;
        let params = Params::new().path("eventCode", Some(event));
        self.get(session, FrameType::Alliances, &params, conditional)
    }

    #[instrument(skip_all, fields(event = %query.event))]
    pub fn rankings(
        &self,
        session: &Session,
        query: &RankingsQuery,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        query.validate()?;
        self.get(session, FrameType::Rankings, &query.params(), conditional)
    }
}
