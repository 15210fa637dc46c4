//! URL building for FIRST API resources

use crate::config::ApiEndpoints;
use crate::constants::FIRST_API_VERSION;
use crate::data_fetcher::models::{Params, Placement};
use crate::session::{Session, Source};

/// Host a session's requests go to. Local sessions report the production host,
/// since that is where the request would have gone.
pub fn base_url<'a>(endpoints: &'a ApiEndpoints, source: Source) -> &'a str {
    match source {
        Source::Staging => &endpoints.staging,
        Source::Production | Source::Local => &endpoints.production,
    }
}

/// Builds the fully qualified URL for one request.
///
/// Format: `{base}/{version}/{season}/{command}{/path...}?{key=value&...}`.
/// Path parameters are appended in declaration order, query parameters keep
/// declaration order, and parameters without a value are left out. The
/// `status` command is season independent and `season` is the bare season
/// resource.
///
/// # Example
/// ```
/// use frc_api::config::ApiEndpoints;
/// use frc_api::data_fetcher::api::build_url;
/// use frc_api::data_fetcher::models::Params;
/// use frc_api::Session;
///
/// let session = Session::new("user", "key").unwrap().with_season(2017).unwrap();
/// let params = Params::new()
///     .path("eventCode", Some("PNCMP"))
///     .query("teamNumber", None::<u32>)
///     .query("tournamentLevel", Some("qual"));
/// let url = build_url(&ApiEndpoints::default(), &session, "schedule", &params);
/// assert_eq!(
///     url,
///     "https://frc-api.firstinspires.org/v2.0/2017/schedule/PNCMP?tournamentLevel=qual"
/// );
/// ```
pub fn build_url(
    endpoints: &ApiEndpoints,
    session: &Session,
    command: &str,
    params: &Params,
) -> String {
    let base = base_url(endpoints, session.source());
    let season = session.season();

    let mut url = match command {
        "status" => format!("{base}/{FIRST_API_VERSION}"),
        "season" => format!("{base}/{FIRST_API_VERSION}/{season}"),
        _ => format!("{base}/{FIRST_API_VERSION}/{season}/{command}"),
    };

    for (_, value) in params.present(Placement::Path) {
        url.push('/');
        url.push_str(&urlencoding::encode(value));
    }

    let query = build_query(params);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    url
}

/// `key=value` pairs joined by `&`, declaration order, values percent-encoded.
pub fn build_query(params: &Params) -> String {
    params
        .present(Placement::Query)
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
