pub mod api;
pub mod fixtures;
pub mod models;
pub mod processors;

pub use api::FrcClient;
pub use fixtures::{DirectoryFixtures, Fixture, FixtureStore};
pub use models::{ApiResponse, Frame, FrameType, RawResponse, ResponseEnvelope};
