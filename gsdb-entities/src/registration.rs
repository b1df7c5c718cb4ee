use crate::{id::Id, time::Timestamp};

/// Join entity recording that a user participates in an event.
///
/// At most one row may exist per (event, user) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRegistration {
    pub id            : Id,
    pub event_id      : Id,
    pub user_id       : Id,
    pub registered_at : Timestamp,
}
