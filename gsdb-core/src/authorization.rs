use std::result::Result as StdResult;

use thiserror::Error;

use crate::entities::User;

#[derive(Debug, Error)]
pub enum Error {
    #[error("administrator privileges required")]
    NotAnAdmin,
}

pub type Result<T> = StdResult<T, Error>;

/// Moderation decisions and direct catalog mutations require an
/// active administrator account.
pub fn authorize_admin(user: &User) -> Result<()> {
    if !user.is_admin || !user.is_active {
        return Err(Error::NotAnAdmin);
    }
    Ok(())
}
