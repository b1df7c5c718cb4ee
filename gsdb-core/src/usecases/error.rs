use thiserror::Error;

use crate::{
    authorization,
    repositories,
    util::validate::{EventInvalidation, GreenSpaceInvalidation},
};
use gsdb_boundary::PayloadCodecError;
use gsdb_entities::{event::TimeOfDayParseError, green_space::WorkingDaysParseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Invalid entry price")]
    EntryPrice,
    #[error("Invalid working days")]
    WorkingDays,
    #[error("Invalid time of day")]
    TimeOfDay,
    #[error("The end time is not after the start time")]
    EndTimeBeforeStart,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("The user already exists")]
    UserExists,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    // Decoding a stored payload failed. Fatal for the affected
    // request: retrying cannot succeed without data repair.
    #[error("Malformed request payload: {0}")]
    MalformedPayload(#[from] PayloadCodecError),
    #[error("The request has already been moderated")]
    RequestNotPending,
    #[error("The target of the update no longer exists")]
    TargetNotFound,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<authorization::Error> for Error {
    fn from(_: authorization::Error) -> Self {
        Self::Forbidden
    }
}

impl From<WorkingDaysParseError> for Error {
    fn from(_: WorkingDaysParseError) -> Self {
        Self::WorkingDays
    }
}

impl From<TimeOfDayParseError> for Error {
    fn from(_: TimeOfDayParseError) -> Self {
        Self::TimeOfDay
    }
}

impl From<GreenSpaceInvalidation> for Error {
    fn from(err: GreenSpaceInvalidation) -> Self {
        match err {
            GreenSpaceInvalidation::Name => Self::Name,
            GreenSpaceInvalidation::EntryPrice => Self::EntryPrice,
        }
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Name => Self::Name,
            EventInvalidation::EndTimeBeforeStart => Self::EndTimeBeforeStart,
        }
    }
}
