//! # gsdb-boundary
//!
//! Serializable, anemic data structures for the greenspacedb storage
//! and transport boundary, plus the payload codec that flattens the
//! typed proposal payloads onto the stored wire shape.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod codec;
#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use self::codec::{decode_payload, encode_payload, PayloadCodecError};

/// Flat wire shape of a content-request payload.
///
/// The three proposal kinds are superimposed onto one record and
/// discriminated by `type`; every kind-specific field is optional.
/// This shape exists only on the wire and in storage — typed code
/// works with `RequestPayload` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadRecord {
    #[serde(rename = "type")]
    pub kind: String,

    // Event fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,

    // Green space fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_space_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_space_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_space_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green_space_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}
