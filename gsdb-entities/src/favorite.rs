use crate::{id::Id, time::Timestamp};

/// Join entity marking a green space as a favorite of a user.
///
/// At most one row may exist per (user, green space) pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id             : Id,
    pub user_id        : Id,
    pub green_space_id : Id,
    pub created_at     : Timestamp,
}
