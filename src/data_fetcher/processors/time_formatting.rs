use chrono::{DateTime, Duration, Utc};
use std::time::SystemTime;

use crate::error::FrcError;

/// Parses an RFC 7231 HTTP-date such as `Last-Modified` into UTC.
///
/// # Examples
///
/// ```
/// use frc_api::data_fetcher::processors::httpdate_to_datetime;
/// use chrono::{TimeZone, Utc};
///
/// let parsed = httpdate_to_datetime("Tue, 28 Mar 2017 21:06:31 GMT").unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2017, 3, 28, 21, 6, 31).unwrap());
/// ```
pub fn httpdate_to_datetime(value: &str) -> Result<DateTime<Utc>, FrcError> {
    let system_time = httpdate::parse_http_date(value.trim()).map_err(|e| {
        FrcError::datetime_parse_error(format!("'{value}' is not an HTTP-date: {e}"))
    })?;
    Ok(DateTime::<Utc>::from(system_time))
}

/// Formats a timestamp as an HTTP-date, suitable for `If-Modified-Since`.
/// Sub-second precision is dropped.
pub fn datetime_to_httpdate(value: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(value))
}

/// Shifts an HTTP-date by whole seconds, e.g. `Last-Modified` plus one
/// second to ask only for changes newer than a previous response.
pub fn offset_httpdate(value: &str, seconds: i64) -> Result<String, FrcError> {
    let shifted = httpdate_to_datetime(value)? + Duration::seconds(seconds);
    Ok(datetime_to_httpdate(shifted))
}
