//! Turns response envelopes into the caller's requested shape.
//!
//! Table output walks the frame type's record path through the JSON payload.
//! Each record becomes one row holding its own fields (nested objects
//! flattened with `.`) followed by the scalar fields of every enclosing
//! level, outermost first. Raw output hands the body back untouched.

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::data_fetcher::models::{
    ApiResponse, Frame, FrameType, RawResponse, ResponseEnvelope, Row, TextFormat,
};
use crate::error::FrcError;
use crate::session::OutputFormat;

/// Shapes an envelope according to `output_format`. A 304 in table mode yields an empty frame.
pub fn assemble(
    envelope: ResponseEnvelope,
    output_format: OutputFormat,
) -> Result<ApiResponse, FrcError> {
    match output_format {
        OutputFormat::Table => build_frame(envelope).map(ApiResponse::Table),
        OutputFormat::Json => Ok(ApiResponse::Json(RawResponse {
            envelope,
            text_format: TextFormat::Json,
        })),
        OutputFormat::Xml => Ok(ApiResponse::Xml(RawResponse {
            envelope,
            text_format: TextFormat::Xml,
        })),
    }
}

pub fn build_frame(envelope: ResponseEnvelope) -> Result<Frame, FrcError> {
    let rows = match envelope.text.as_deref() {
        None => return Ok(Frame::empty(envelope)),
        Some(text) => {
            let payload = parse_payload(text, &envelope.url)?;
            flatten_records(&payload, envelope.frame_type, &envelope.url)?
        }
    };
    debug!(
        "Assembled {} rows for frame type {}",
        rows.len(),
        envelope.frame_type
    );
    Ok(Frame::new(rows, envelope))
}

/// Parses a JSON body, classifying failures by what the text looks like.
pub fn parse_payload(text: &str, url: &str) -> Result<Value, FrcError> {
    serde_json::from_str::<Value>(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            FrcError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            FrcError::api_malformed_json("Response is not valid JSON", url)
        } else {
            FrcError::api_malformed_json(e.to_string(), url)
        }
    })
}

/// Rows for `frame_type` extracted from an already parsed payload.
pub fn flatten_records(
    payload: &Value,
    frame_type: FrameType,
    url: &str,
) -> Result<Vec<Row>, FrcError> {
    let path = frame_type.record_path();
    let mut rows = Vec::new();

    if path.is_empty() {
        let object = payload.as_object().ok_or_else(|| {
            FrcError::api_unexpected_structure(
                format!("expected a JSON object for {frame_type}"),
                url,
            )
        })?;
        rows.push(flatten_object(object));
        return Ok(rows);
    }

    walk(payload, path, &[], &mut rows, url)?;
    Ok(rows)
}

fn walk(
    level: &Value,
    path: &[&str],
    meta: &[(String, Value)],
    rows: &mut Vec<Row>,
    url: &str,
) -> Result<(), FrcError> {
    let Some((key, rest)) = path.split_first() else {
        return Ok(());
    };
    let object = level.as_object().ok_or_else(|| {
        FrcError::api_unexpected_structure(format!("expected an object holding '{key}'"), url)
    })?;

    let mut level_meta = meta.to_vec();
    level_meta.extend(
        object
            .iter()
            .filter(|(name, value)| name.as_str() != *key && is_scalar(value))
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    let records = match object.get(*key) {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(records)) => records,
        Some(_) => {
            return Err(FrcError::api_unexpected_structure(
                format!("'{key}' is not an array"),
                url,
            ));
        }
    };

    for record in records {
        if rest.is_empty() {
            let fields = record.as_object().ok_or_else(|| {
                FrcError::api_unexpected_structure(format!("'{key}' holds a non-object"), url)
            })?;
            let mut row = flatten_object(fields);
            for (name, value) in &level_meta {
                if !row.contains_key(name) {
                    row.insert(name.clone(), value.clone());
                }
            }
            rows.push(row);
        } else {
            walk(record, rest, &level_meta, rows, url)?;
        }
    }
    Ok(())
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

/// Copies an object's fields, expanding nested objects into `parent.child` keys.
pub fn flatten_object(object: &Map<String, Value>) -> Row {
    let mut row = Row::new();
    flatten_into(&mut row, None, object);
    row
}

fn flatten_into(row: &mut Row, prefix: Option<&str>, object: &Map<String, Value>) {
    for (name, value) in object {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(row, Some(&key), nested),
            other => {
                row.insert(key, other.clone());
            }
        }
    }
}
