//! Per-endpoint filter arguments.
//!
//! Each query knows which argument combinations the FIRST API rejects and
//! how its fields map onto URL parameters. `validate` always runs before any
//! I/O is attempted.

use std::fmt;

use super::params::Params;
use crate::error::FrcError;

/// Conditional-fetch inputs shared by every endpoint.
///
/// Both take HTTP-date strings such as `Sat, 01 Apr 2017 12:00:00 GMT`.
/// Supplying both at once is allowed but the server's behavior is undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditional {
    /// Sent as `If-Modified-Since`; unchanged data answers 304.
    pub mod_since: Option<String>,
    /// Sent as `FMS-OnlyModifiedSince`; the body only holds records changed since then.
    pub only_mod_since: Option<String>,
}

impl Conditional {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn mod_since(since: impl Into<String>) -> Self {
        Conditional {
            mod_since: Some(since.into()),
            only_mod_since: None,
        }
    }

    pub fn only_mod_since(since: impl Into<String>) -> Self {
        Conditional {
            mod_since: None,
            only_mod_since: Some(since.into()),
        }
    }
}

/// Competition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentLevel {
    #[default]
    Qual,
    Playoff,
}

impl fmt::Display for TournamentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentLevel::Qual => f.write_str("qual"),
            TournamentLevel::Playoff => f.write_str("playoff"),
        }
    }
}

pub(crate) fn require_event(event: &str) -> Result<(), FrcError> {
    if event.trim().is_empty() {
        return Err(FrcError::invalid_arguments("an event code is required"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    pub event: Option<String>,
    pub team: Option<u32>,
    pub district: Option<String>,
    /// `Some(true)` restricts results to events outside any district.
    pub exclude_district: Option<bool>,
}

impl EventsQuery {
    pub fn validate(&self) -> Result<(), FrcError> {
        if self.event.is_some()
            && (self.team.is_some() || self.district.is_some() || self.exclude_district.is_some())
        {
            return Err(FrcError::invalid_arguments(
                "if you specify an event, you cannot specify any other arguments",
            ));
        }
        if self.district.is_some() && self.exclude_district.is_some() {
            return Err(FrcError::invalid_arguments(
                "you cannot specify both the district and exclude_district arguments",
            ));
        }
        Ok(())
    }

    pub fn params(&self) -> Params {
        Params::new()
            .query("eventCode", self.event.as_deref())
            .query("teamNumber", self.team)
            .query("districtCode", self.district.as_deref())
            .query("excludeDistrict", self.exclude_district)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamsQuery {
    pub team: Option<u32>,
    pub event: Option<String>,
    pub district: Option<String>,
    /// U.S. state name, spelled out.
    pub state: Option<String>,
    /// Requests a single page. When absent, table output fetches and joins every page.
    pub page: Option<u32>,
}

impl TeamsQuery {
    pub fn validate(&self) -> Result<(), FrcError> {
        if self.team.is_some()
            && (self.event.is_some() || self.district.is_some() || self.state.is_some())
        {
            return Err(FrcError::invalid_arguments(
                "if you specify team, you cannot specify event, district, or state",
            ));
        }
        Ok(())
    }

    pub fn params(&self) -> Params {
        Params::new()
            .query("teamNumber", self.team)
            .query("eventCode", self.event.as_deref())
            .query("districtCode", self.district.as_deref())
            .query("state", self.state.as_deref())
            .query("page", self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub event: String,
    pub level: TournamentLevel,
    pub team: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl ScheduleQuery {
    pub fn new(event: impl Into<String>) -> Self {
        ScheduleQuery {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FrcError> {
        require_event(&self.event)
    }

    pub fn params(&self) -> Params {
        Params::new()
            .path("eventCode", Some(&self.event))
            .query("teamNumber", self.team)
            .query("tournamentLevel", Some(self.level))
            .query("start", self.start)
            .query("end", self.end)
    }
}

/// Schedule with results merged in for matches already played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HybridQuery {
    pub event: String,
    pub level: TournamentLevel,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl HybridQuery {
    pub fn new(event: impl Into<String>) -> Self {
        HybridQuery {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FrcError> {
        require_event(&self.event)
    }

    pub fn params(&self) -> Params {
        Params::new()
            .path("eventCode", Some(&self.event))
            .path("tournamentLevel", Some(self.level))
            .path("hybrid", Some("hybrid"))
            .query("start", self.start)
            .query("end", self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchesQuery {
    pub event: String,
    /// Required whenever `match_number`, `start` or `end` is set.
    pub level: Option<TournamentLevel>,
    pub team: Option<u32>,
    pub match_number: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl Default for MatchesQuery {
    fn default() -> Self {
        MatchesQuery {
            event: String::new(),
            level: Some(TournamentLevel::Qual),
            team: None,
            match_number: None,
            start: None,
            end: None,
        }
    }
}

impl MatchesQuery {
    pub fn new(event: impl Into<String>) -> Self {
        MatchesQuery {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FrcError> {
        require_event(&self.event)?;
        if (self.match_number.is_some() || self.start.is_some() || self.end.is_some())
            && self.level.is_none()
        {
            return Err(FrcError::invalid_arguments(
                "you must specify the level when you specify match, start, or end",
            ));
        }
        validate_match_filters(self.team, self.match_number, self.start, self.end)
    }

    pub fn params(&self) -> Params {
        Params::new()
            .path("eventCode", Some(&self.event))
            .query("tournamentLevel", self.level)
            .query("teamNumber", self.team)
            .query("matchNumber", self.match_number)
            .query("start", self.start)
            .query("end", self.end)
    }
}

/// Detailed score breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoresQuery {
    pub event: String,
    pub level: TournamentLevel,
    pub team: Option<u32>,
    pub match_number: Option<u32>,
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl ScoresQuery {
    pub fn new(event: impl Into<String>) -> Self {
        ScoresQuery {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FrcError> {
        require_event(&self.event)?;
        validate_match_filters(self.team, self.match_number, self.start, self.end)
    }

    pub fn params(&self) -> Params {
        Params::new()
            .path("eventCode", Some(&self.event))
            .path("tournamentLevel", Some(self.level))
            .query("teamNumber", self.team)
            .query("matchNumber", self.match_number)
            .query("start", self.start)
            .query("end", self.end)
    }
}

fn validate_match_filters(
    team: Option<u32>,
    match_number: Option<u32>,
    start: Option<u32>,
    end: Option<u32>,
) -> Result<(), FrcError> {
    if team.is_some() && match_number.is_some() {
        return Err(FrcError::invalid_arguments(
            "you cannot specify both a team and a match number",
        ));
    }
    if (start.is_some() || end.is_some()) && match_number.is_some() {
        return Err(FrcError::invalid_arguments(
            "you cannot specify start or end if you specify match",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingsQuery {
    pub event: String,
    pub team: Option<u32>,
    /// Only the best `top` teams.
    pub top: Option<u32>,
}

impl RankingsQuery {
    pub fn new(event: impl Into<String>) -> Self {
        RankingsQuery {
            event: event.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), FrcError> {
        require_event(&self.event)?;
        if self.team.is_some() && self.top.is_some() {
            return Err(FrcError::invalid_arguments(
                "you cannot specify both the team and top arguments",
            ));
        }
        Ok(())
    }

    pub fn params(&self) -> Params {
        Params::new()
            .path("eventCode", Some(&self.event))
            .query("teamNumber", self.team)
            .query("top", self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Placement;

    fn names(params: &Params, placement: Placement) -> Vec<&'static str> {
        params.present(placement).map(|(name, _)| name).collect()
    }

    #[test]
    fn test_events_event_excludes_other_filters() {
        let query = EventsQuery {
            event: Some("PNCMP".to_string()),
            team: Some(2910),
            ..Default::default()
        };
        assert!(query.validate().unwrap_err().is_argument_error());

        let query = EventsQuery {
            event: Some("PNCMP".to_string()),
            exclude_district: Some(true),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = EventsQuery {
            event: Some("PNCMP".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_events_district_and_exclude_district_are_exclusive() {
        let query = EventsQuery {
            district: Some("PNW".to_string()),
            exclude_district: Some(false),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = EventsQuery {
            team: Some(2910),
            district: Some("PNW".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_teams_team_excludes_location_filters() {
        for query in [
            TeamsQuery {
                team: Some(360),
                event: Some("WASNO".to_string()),
                ..Default::default()
            },
            TeamsQuery {
                team: Some(360),
                district: Some("PNW".to_string()),
                ..Default::default()
            },
            TeamsQuery {
                team: Some(360),
                state: Some("Washington".to_string()),
                ..Default::default()
            },
        ] {
            assert!(query.validate().unwrap_err().is_argument_error());
        }

        let query = TeamsQuery {
            team: Some(360),
            page: Some(2),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_matches_filters() {
        let mut query = MatchesQuery::new("PNCMP");
        query.team = Some(2910);
        query.match_number = Some(12);
        assert!(query.validate().is_err());

        let mut query = MatchesQuery::new("PNCMP");
        query.match_number = Some(12);
        query.start = Some(10);
        assert!(query.validate().is_err());

        let mut query = MatchesQuery::new("PNCMP");
        query.match_number = Some(12);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_matches_requires_level_with_match_range() {
        let query = MatchesQuery {
            level: None,
            end: Some(20),
            ..MatchesQuery::new("PNCMP")
        };
        assert!(query.validate().unwrap_err().is_argument_error());

        let query = MatchesQuery {
            level: None,
            team: Some(2910),
            ..MatchesQuery::new("PNCMP")
        };
        assert!(query.validate().is_ok());
        assert!(query.params().get("tournamentLevel").is_none());
    }

    #[test]
    fn test_scores_filters() {
        let query = ScoresQuery {
            team: Some(1983),
            match_number: Some(3),
            ..ScoresQuery::new("PNCMP")
        };
        assert!(query.validate().is_err());

        let query = ScoresQuery {
            end: Some(3),
            match_number: Some(3),
            ..ScoresQuery::new("PNCMP")
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_rankings_team_and_top_are_exclusive() {
        let query = RankingsQuery {
            team: Some(2910),
            top: Some(8),
            ..RankingsQuery::new("PNCMP")
        };
        assert!(query.validate().unwrap_err().is_argument_error());
        assert!(RankingsQuery::new("PNCMP").validate().is_ok());
    }

    #[test]
    fn test_event_is_required() {
        assert!(ScheduleQuery::new("").validate().is_err());
        assert!(HybridQuery::new(" ").validate().is_err());
        assert!(RankingsQuery::default().validate().is_err());
    }

    #[test]
    fn test_parameter_placement() {
        let hybrid = HybridQuery {
            level: TournamentLevel::Playoff,
            start: Some(1),
            ..HybridQuery::new("PNCMP")
        };
        let params = hybrid.params();
        assert_eq!(
            params.present(Placement::Path).map(|(_, v)| v).collect::<Vec<_>>(),
            vec!["PNCMP", "playoff", "hybrid"]
        );
        assert_eq!(names(&params, Placement::Query), vec!["start"]);

        let scores = ScoresQuery::new("PNCMP").params();
        assert_eq!(names(&scores, Placement::Path), vec!["eventCode", "tournamentLevel"]);

        let schedule = ScheduleQuery::new("PNCMP").params();
        assert_eq!(names(&schedule, Placement::Path), vec!["eventCode"]);
        assert_eq!(schedule.get("tournamentLevel"), Some("qual"));
    }

    #[test]
    fn test_exclude_district_renders_as_bool() {
        let query = EventsQuery {
            exclude_district: Some(true),
            ..Default::default()
        };
        assert_eq!(query.params().get("excludeDistrict"), Some("true"));
    }

    #[test]
    fn test_conditional_constructors() {
        let since = "Sat, 01 Apr 2017 12:00:00 GMT";
        assert_eq!(Conditional::mod_since(since).mod_since.as_deref(), Some(since));
        assert!(Conditional::mod_since(since).only_mod_since.is_none());
        assert_eq!(
            Conditional::only_mod_since(since).only_mod_since.as_deref(),
            Some(since)
        );
        assert_eq!(Conditional::none(), Conditional::default());
    }
}
