//! Walks every page of the teams listing and stitches the pages into one frame

use serde_json::Value;
use tracing::{debug, info, instrument};

use super::client::FrcClient;
use crate::constants::MAX_TEAM_PAGES;
use crate::data_fetcher::models::{
    ApiResponse, Conditional, Frame, FrameType, Params, ResponseEnvelope,
};
use crate::data_fetcher::processors::{assemble, build_frame, parse_payload};
use crate::error::FrcError;
use crate::session::{OutputFormat, Session};

/// `pageTotal` of a teams page; a payload without one is a single page.
/// Counts above [`MAX_TEAM_PAGES`] are rejected.
pub fn page_total(text: &str, url: &str) -> Result<u32, FrcError> {
    let payload = parse_payload(text, url)?;
    let value = match payload.get("pageTotal") {
        None | Some(Value::Null) => return Ok(1),
        Some(value) => value,
    };
    match value.as_u64() {
        Some(n) if n <= u64::from(MAX_TEAM_PAGES) => Ok(n as u32),
        Some(n) => Err(FrcError::api_unexpected_structure(
            format!("pageTotal {n} exceeds the {MAX_TEAM_PAGES} page limit"),
            url,
        )),
        None => Err(FrcError::api_unexpected_structure(
            format!("pageTotal is not a page count: {value}"),
            url,
        )),
    }
}

/// Whether a first page should be followed by the rest.
fn wants_more_pages(session: &Session, params: &Params, first: &ResponseEnvelope) -> bool {
    session.output_format() == OutputFormat::Table
        && params.get("page").is_none()
        && first.status_code == 200
}

impl FrcClient {
    /// Fetches the teams listing. In table mode without an explicit page,
    /// every page is fetched in order and the rows concatenated; the result
    /// carries the last page's envelope. Any failing page fails the call.
    #[instrument(skip(self, session, params, conditional))]
    pub(crate) fn get_team_pages(
        &self,
        session: &Session,
        params: Params,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        let first = self.fetch_envelope(session, FrameType::Teams, &params, conditional)?;
        if !wants_more_pages(session, &params, &first) {
            return assemble(first, session.output_format());
        }

        let total = match first.text.as_deref() {
            Some(text) => page_total(text, &first.url)?,
            None => 1,
        };
        if total <= 1 {
            return assemble(first, session.output_format());
        }

        info!("Teams listing spans {total} pages; fetching pages 2..={total}");
        let mut frames = Vec::new();
        frames.push(build_frame(first)?);

        for page in 2..=total {
            let mut page_params = params.clone();
            page_params.set("page", Some(page));
            let envelope =
                self.fetch_envelope(session, FrameType::Teams, &page_params, conditional)?;
            let frame = build_frame(envelope)?;
            debug!("Page {page}/{total} returned {} rows", frame.len());
            frames.push(frame);
        }

        Frame::concat(frames)
            .map(ApiResponse::Table)
            .ok_or_else(|| FrcError::api_no_data("no team pages were assembled", "teams"))
    }
}
