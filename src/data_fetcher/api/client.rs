use tracing::debug;

use super::fetch_utils::{fetch_local, fetch_network};
use super::http_client::{HttpTransport, Transport};
use super::urls::build_url;
use crate::config::{ApiEndpoints, Config};
use crate::data_fetcher::fixtures::{DirectoryFixtures, FixtureStore};
use crate::data_fetcher::models::{ApiResponse, Conditional, FrameType, Params, ResponseEnvelope};
use crate::data_fetcher::processors::assemble;
use crate::error::FrcError;
use crate::session::Session;

/// Entry point for every endpoint. Holds no per-request state, so one
/// client can serve any number of sessions.
pub struct FrcClient {
    endpoints: ApiEndpoints,
    transport: Box<dyn Transport + Send + Sync>,
    fixtures: Box<dyn FixtureStore + Send + Sync>,
}

impl FrcClient {
    /// Default hosts, default timeout and the bundled fixtures.
    pub fn new() -> Result<Self, FrcError> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self, FrcError> {
        config.validate()?;
        Ok(FrcClient {
            endpoints: config.endpoints(),
            transport: Box::new(HttpTransport::new(config.http_timeout_seconds)?),
            fixtures: Box::new(DirectoryFixtures::new(config.fixture_root())),
        })
    }

    pub fn with_transport(mut self, transport: impl Transport + Send + Sync + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    pub fn with_fixtures(mut self, fixtures: impl FixtureStore + Send + Sync + 'static) -> Self {
        self.fixtures = Box::new(fixtures);
        self
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// URL a request would be sent to, whatever the session's source.
    pub fn url_for(&self, session: &Session, frame_type: FrameType, params: &Params) -> String {
        build_url(&self.endpoints, session, frame_type.command(), params)
    }

    /// One conditional fetch, from the network or from fixtures depending on the session.
    pub fn fetch_envelope(
        &self,
        session: &Session,
        frame_type: FrameType,
        params: &Params,
        conditional: &Conditional,
    ) -> Result<ResponseEnvelope, FrcError> {
        let url = self.url_for(session, frame_type, params);
        if session.is_local() {
            fetch_local(self.fixtures.as_ref(), &url, session, frame_type, conditional)
        } else {
            fetch_network(self.transport.as_ref(), &url, session, frame_type, conditional)
        }
    }

    /// Fetches and shapes a single response.
    pub(crate) fn get(
        &self,
        session: &Session,
        frame_type: FrameType,
        params: &Params,
        conditional: &Conditional,
    ) -> Result<ApiResponse, FrcError> {
        let envelope = self.fetch_envelope(session, frame_type, params, conditional)?;
        debug!(
            "Assembling {} response for {frame_type}",
            session.output_format()
        );
        assemble(envelope, session.output_format())
    }
}

impl std::fmt::Debug for FrcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrcClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
