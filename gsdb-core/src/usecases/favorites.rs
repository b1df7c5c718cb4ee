use url::Url;

use super::prelude::*;
use super::resolve_image_urls;
use crate::gateways::images::ImageStorageGateway;

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

impl FavoriteToggle {
    /// User-facing confirmation message.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Added to favorites",
            Self::Removed => "Removed from favorites",
        }
    }
}

/// Marks a green space as favorite of the user.
///
/// Adding an existing favorite short-circuits to the existing row.
pub fn add_favorite<R>(repo: &R, user: &User, green_space_id: &Id) -> Result<Id>
where
    R: FavoriteRepo,
{
    let favorite = Favorite {
        id: Id::new(),
        user_id: user.id.clone(),
        green_space_id: green_space_id.clone(),
        created_at: Timestamp::now(),
    };
    match repo.create_favorite(&favorite) {
        Ok(()) => Ok(favorite.id),
        Err(RepoError::AlreadyExists) => {
            let existing = repo
                .try_get_favorite(user.id.as_str(), green_space_id.as_str())?
                .ok_or(RepoError::NotFound)?;
            Ok(existing.id)
        }
        Err(err) => Err(err.into()),
    }
}

/// Removing an absent favorite is a no-op success.
pub fn remove_favorite<R>(repo: &R, user: &User, green_space_id: &Id) -> Result<Option<Id>>
where
    R: FavoriteRepo,
{
    let Some(favorite) = repo.try_get_favorite(user.id.as_str(), green_space_id.as_str())? else {
        return Ok(None);
    };
    match repo.delete_favorite(user.id.as_str(), green_space_id.as_str()) {
        Ok(()) => Ok(Some(favorite.id)),
        // Already gone.
        Err(RepoError::NotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn toggle_favorite<R>(repo: &R, user: &User, green_space_id: &Id) -> Result<FavoriteToggle>
where
    R: FavoriteRepo,
{
    if remove_favorite(repo, user, green_space_id)?.is_some() {
        return Ok(FavoriteToggle::Removed);
    }
    let favorite = Favorite {
        id: Id::new(),
        user_id: user.id.clone(),
        green_space_id: green_space_id.clone(),
        created_at: Timestamp::now(),
    };
    match repo.create_favorite(&favorite) {
        Ok(()) => Ok(FavoriteToggle::Added),
        // Lost the race against a concurrent insert; the favorite
        // exists either way.
        Err(RepoError::AlreadyExists) => Ok(FavoriteToggle::Added),
        Err(err) => Err(err.into()),
    }
}

pub fn is_favorited<R>(repo: &R, user: &User, green_space_id: &Id) -> Result<bool>
where
    R: FavoriteRepo,
{
    Ok(repo
        .try_get_favorite(user.id.as_str(), green_space_id.as_str())?
        .is_some())
}

/// A favorited green space prepared for display.
#[derive(Debug, Clone)]
pub struct FavoritedGreenSpace {
    pub green_space: GreenSpace,
    pub image_urls: Vec<Url>,
    pub favorited_at: Timestamp,
}

pub fn favorites_of_user<R>(
    repo: &R,
    images: &dyn ImageStorageGateway,
    user: &User,
) -> Result<Vec<FavoritedGreenSpace>>
where
    R: FavoriteRepo + GreenSpaceRepo,
{
    let favorites = repo.favorites_by_user(user.id.as_str())?;
    let mut results = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        match repo.get_green_space(favorite.green_space_id.as_str()) {
            Ok(green_space) => {
                let image_urls = resolve_image_urls(images, &green_space.images)?;
                results.push(FavoritedGreenSpace {
                    green_space,
                    image_urls,
                    favorited_at: favorite.created_at,
                });
            }
            // Favorites may outlive their green space.
            Err(RepoError::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(results)
}
