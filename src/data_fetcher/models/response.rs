use serde::Serialize;
use serde_json::Value;

use super::envelope::ResponseEnvelope;
use super::frame::Frame;
use super::frame_type::TextFormat;

/// Unparsed response body with its envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawResponse {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    pub text_format: TextFormat,
}

impl RawResponse {
    /// Structured dictionary: every envelope field plus `text_format`.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn text(&self) -> Option<&str> {
        self.envelope.text.as_deref()
    }
}

/// Result of every endpoint call; the variant follows the session's output format.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Table(Frame),
    Json(RawResponse),
    Xml(RawResponse),
}

impl ApiResponse {
    pub fn envelope(&self) -> &ResponseEnvelope {
        match self {
            ApiResponse::Table(frame) => &frame.attr,
            ApiResponse::Json(raw) | ApiResponse::Xml(raw) => &raw.envelope,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.envelope().status_code
    }

    pub fn as_table(&self) -> Option<&Frame> {
        match self {
            ApiResponse::Table(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Frame> {
        match self {
            ApiResponse::Table(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawResponse> {
        match self {
            ApiResponse::Json(raw) | ApiResponse::Xml(raw) => Some(raw),
            ApiResponse::Table(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::FrameType;
    use chrono::Utc;

    fn raw(text_format: TextFormat) -> RawResponse {
        RawResponse {
            envelope: ResponseEnvelope {
                status_code: 200,
                url: "https://frc-api.firstinspires.org/v2.0/2017".to_string(),
                requested_url: "https://frc-api.firstinspires.org/v2.0/2017".to_string(),
                download_time: Utc::now(),
                last_modified: Some("Sat, 01 Apr 2017 12:00:00 GMT".to_string()),
                mod_since: None,
                only_mod_since: None,
                local_data: false,
                local_time: None,
                frame_type: FrameType::Season,
                text: Some("<Season/>".to_string()),
            },
            text_format,
        }
    }

    #[test]
    fn test_to_value_merges_envelope_and_format() {
        let value = raw(TextFormat::Xml).to_value().unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map["text_format"], "xml");
        assert_eq!(map["frame_type"], "season");
        assert_eq!(map["text"], "<Season/>");
        for field in [
            "status_code",
            "url",
            "requested_url",
            "download_time",
            "last_modified",
            "mod_since",
            "only_mod_since",
            "local_data",
            "local_time",
        ] {
            assert!(map.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn test_envelope_accessor_is_format_agnostic() {
        let response = ApiResponse::Xml(raw(TextFormat::Xml));
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.envelope().frame_type, FrameType::Season);
        assert!(response.as_table().is_none());
        assert!(response.as_raw().is_some());
    }
}
