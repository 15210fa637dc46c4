use chrono::{DateTime, Utc};
use serde::Serialize;

use super::frame_type::FrameType;

/// Request metadata attached to every result, whatever the output format or source.
///
/// `text` is `None` exactly when `status_code` is 304. On the network path
/// `requested_url == url` and `local_time` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub url: String,
    pub requested_url: String,
    pub download_time: DateTime<Utc>,
    pub last_modified: Option<String>,
    pub mod_since: Option<String>,
    pub only_mod_since: Option<String>,
    pub local_data: bool,
    pub local_time: Option<DateTime<Utc>>,
    pub frame_type: FrameType,
    pub text: Option<String>,
}

impl ResponseEnvelope {
    pub fn is_not_modified(&self) -> bool {
        self.status_code == 304
    }

    pub fn is_fresh(&self) -> bool {
        self.text.is_some()
    }

    /// True when no conditional header was requested for this fetch.
    pub fn is_unconditional(&self) -> bool {
        self.mod_since.is_none() && self.only_mod_since.is_none()
    }
}
