use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::{id::Id, image::ImageRef, time::Timestamp};

pub type RequestStatusPrimitive = i16;

/// Moderation state of a content request.
///
/// `Pending` is the only non-terminal state; a request moves to
/// `Approved` or `Rejected` exactly once and stays there.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum RequestStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid request status primitive: {0}")]
pub struct InvalidRequestStatusPrimitive(RequestStatusPrimitive);

impl TryFrom<i16> for RequestStatus {
    type Error = InvalidRequestStatusPrimitive;
    fn try_from(from: RequestStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRequestStatusPrimitive(from))
    }
}

impl From<RequestStatus> for RequestStatusPrimitive {
    fn from(from: RequestStatus) -> Self {
        from.to_i16().expect("Request status primitive")
    }
}

/// The kind of change a content request proposes.
///
/// The string representations are the wire literals used by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, EnumString, strum::Display)]
pub enum RequestKind {
    #[strum(serialize = "Add Event")]
    AddEvent,
    #[strum(serialize = "Add Green Space")]
    AddGreenSpace,
    #[strum(serialize = "Update Green Space")]
    UpdateGreenSpace,
}

/// Transport-encoded proposal payload, opaque outside the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for EncodedPayload {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<EncodedPayload> for String {
    fn from(from: EncodedPayload) -> Self {
        from.0
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-submitted proposal awaiting (or past) moderation.
///
/// The payload stays encoded until the moderation engine decodes it
/// for materialization; listings decode it for display only.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub id         : Id,
    pub submitter  : Id,
    pub kind       : RequestKind,
    pub status     : RequestStatus,
    pub payload    : EncodedPayload,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

/// Proposed fields for a new event.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub name        : String,
    pub category    : String,
    pub date        : String,
    pub start_time  : String,
    pub end_time    : String,
    pub description : String,
    // Green space id token of the proposed venue.
    pub location    : String,
}

/// Proposed fields for a new green space.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreenSpaceDraft {
    pub name         : String,
    pub entry_price  : f64,
    pub plant_info   : String,
    pub working_time : String,
    pub working_days : String,
    pub description  : String,
    pub location     : String,
    pub facilities   : String,
    pub images       : Vec<ImageRef>,
}

/// Proposed partial update of an existing green space.
///
/// All fields except the target id are optional; absent fields leave
/// the live entity untouched.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreenSpaceUpdateDraft {
    pub green_space_id : Id,
    pub name           : Option<String>,
    pub entry_price    : Option<f64>,
    pub plant_info     : Option<String>,
    pub working_time   : Option<String>,
    pub working_days   : Option<String>,
    pub description    : Option<String>,
    pub location       : Option<String>,
    pub facilities     : Option<String>,
    pub images         : Option<Vec<ImageRef>>,
}

/// Decoded proposal payload: one variant per request kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    AddEvent(EventDraft),
    AddGreenSpace(GreenSpaceDraft),
    UpdateGreenSpace(GreenSpaceUpdateDraft),
}

impl RequestPayload {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::AddEvent(_) => RequestKind::AddEvent,
            Self::AddGreenSpace(_) => RequestKind::AddGreenSpace,
            Self::UpdateGreenSpace(_) => RequestKind::UpdateGreenSpace,
        }
    }
}
