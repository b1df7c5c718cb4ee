use super::prelude::*;
use crate::{
    gateways::identity::{Identity, IdentityGateway},
    util::validate,
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub external_id : String,
    pub first_name  : String,
    pub last_name   : String,
    pub email       : String,
    pub phone       : String,
    pub image_url   : String,
    pub is_admin    : bool,
}

/// Creates the local account for a fresh identity-provider sign-up.
pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !validate::is_valid_email(&u.email) {
        return Err(Error::EmailAddress);
    }
    if repo.try_get_user_by_external_id(&u.external_id)?.is_some() {
        return Err(Error::UserExists);
    }
    let NewUser {
        external_id,
        first_name,
        last_name,
        email,
        phone,
        image_url,
        is_admin,
    } = u;
    let user = User {
        id: Id::new(),
        external_id,
        first_name,
        last_name,
        email,
        phone,
        image_url,
        is_admin,
        is_active: true,
    };
    log::debug!("Creating new user: external id = {}", user.external_id);
    repo.create_user(&user)?;
    Ok(user)
}

/// Profile fields an account owner may change.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name : Option<String>,
    pub last_name  : Option<String>,
    pub email      : Option<String>,
    pub phone      : Option<String>,
    pub image_url  : Option<String>,
}

pub fn update_user<R: UserRepo>(repo: &R, id: &Id, patch: UserPatch) -> Result<User> {
    let mut user = repo.get_user(id.as_str())?;
    let UserPatch {
        first_name,
        last_name,
        email,
        phone,
        image_url,
    } = patch;
    if let Some(email) = email {
        if !validate::is_valid_email(&email) {
            return Err(Error::EmailAddress);
        }
        user.email = email;
    }
    if let Some(first_name) = first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = last_name {
        user.last_name = last_name;
    }
    if let Some(phone) = phone {
        user.phone = phone;
    }
    if let Some(image_url) = image_url {
        user.image_url = image_url;
    }
    repo.update_user(&user)?;
    Ok(user)
}

/// Handles the identity provider's deletion webhook. A subject
/// without a local account is logged and ignored.
pub fn delete_user_by_external_id<R: UserRepo>(repo: &R, external_id: &str) -> Result<()> {
    match repo.try_get_user_by_external_id(external_id)? {
        Some(user) => Ok(repo.delete_user(user.id.as_str())?),
        None => {
            log::warn!("Cannot delete user, none found for external id {external_id}");
            Ok(())
        }
    }
}

/// Resolves the calling user once at the boundary. All other use
/// cases receive the resolved caller as an explicit parameter.
pub fn resolve_current_user<R: UserRepo>(
    repo: &R,
    identities: &dyn IdentityGateway,
) -> Result<Option<User>> {
    let Some(Identity { subject }) = identities.current_identity() else {
        return Ok(None);
    };
    Ok(repo.try_get_user_by_external_id(&subject)?)
}

pub fn all_users<R: UserRepo>(repo: &R) -> Result<Vec<User>> {
    Ok(repo.all_users()?)
}
