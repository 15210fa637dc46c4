pub mod envelope;
pub mod frame;
pub mod frame_type;
pub mod params;
pub mod queries;
pub mod response;

pub use envelope::ResponseEnvelope;
pub use frame::{Frame, Row};
pub use frame_type::{FrameType, TextFormat};
pub use params::{Param, Params, Placement};
pub use queries::{
    Conditional, EventsQuery, HybridQuery, MatchesQuery, RankingsQuery, ScheduleQuery,
    ScoresQuery, TeamsQuery, TournamentLevel,
};
pub use response::{ApiResponse, RawResponse};
