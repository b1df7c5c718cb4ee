use crate::id::Id;

/// An end user account, mirrored from the external identity provider.
///
/// There is exactly one record per identity-provider subject; the
/// `external_id` carries that subject.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub external_id : String,
    pub first_name  : String,
    pub last_name   : String,
    pub email       : String,
    pub phone       : String,
    pub image_url   : String,
    pub is_admin    : bool,
    pub is_active   : bool,
}
