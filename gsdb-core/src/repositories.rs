// Low-level storage access traits.
// Each repository is responsible for a single entity and its
// relationships. Related entities are only referenced by their id
// and never modified or loaded by another repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object was modified concurrently")]
    Conflict,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    // Fails with `AlreadyExists` if the external id is already taken:
    // there is exactly one account per identity-provider subject.
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_external_id(&self, external_id: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait GreenSpaceRepo {
    fn create_green_space(&self, green_space: GreenSpace) -> Result<()>;
    fn update_green_space(&self, green_space: &GreenSpace) -> Result<()>;
    fn delete_green_space(&self, id: &str) -> Result<()>;

    fn get_green_space(&self, id: &str) -> Result<GreenSpace>;
    fn all_green_spaces(&self) -> Result<Vec<GreenSpace>>;
    fn count_green_spaces(&self) -> Result<usize>;
}

pub trait EventRepo {
    fn create_event(&self, event: Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    fn all_events(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
}

pub trait ContentRequestRepo {
    fn create_content_request(&self, request: &ContentRequest) -> Result<()>;

    fn get_content_request(&self, id: &str) -> Result<ContentRequest>;

    // Unordered full scan; callers filter and sort.
    fn all_content_requests(&self) -> Result<Vec<ContentRequest>>;
    fn content_requests_by_submitter(&self, submitter_id: &str) -> Result<Vec<ContentRequest>>;

    // Compare-and-set transition: patches status and `updated_at`
    // only while the current status equals `expected`, otherwise
    // fails with `Conflict`. This is what makes moderation decisions
    // at-most-once under concurrent callers.
    fn update_content_request_status(
        &self,
        id: &str,
        expected: RequestStatus,
        next: RequestStatus,
        at: Timestamp,
    ) -> Result<()>;
}

pub trait FavoriteRepo {
    // At most one favorite per (user, green space) pair; a duplicate
    // insert fails with `AlreadyExists`.
    fn create_favorite(&self, favorite: &Favorite) -> Result<()>;
    fn delete_favorite(&self, user_id: &str, green_space_id: &str) -> Result<()>;

    fn try_get_favorite(&self, user_id: &str, green_space_id: &str) -> Result<Option<Favorite>>;
    fn favorites_by_user(&self, user_id: &str) -> Result<Vec<Favorite>>;
}

pub trait RegistrationRepo {
    // At most one registration per (event, user) pair; a duplicate
    // insert fails with `AlreadyExists`.
    fn create_registration(&self, registration: &EventRegistration) -> Result<()>;
    fn delete_registration(&self, event_id: &str, user_id: &str) -> Result<()>;

    fn try_get_registration(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<EventRegistration>>;
    fn registrations_by_user(&self, user_id: &str) -> Result<Vec<EventRegistration>>;
}
