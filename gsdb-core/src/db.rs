use crate::repositories::*;

/// Union of all storage capabilities a complete backend provides.
pub trait Db:
    UserRepo + GreenSpaceRepo + EventRepo + ContentRequestRepo + FavoriteRepo + RegistrationRepo
{
}

impl<T> Db for T where
    T: UserRepo + GreenSpaceRepo + EventRepo + ContentRequestRepo + FavoriteRepo + RegistrationRepo
{
}
