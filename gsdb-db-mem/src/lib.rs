//! # gsdb-db-mem
//!
//! In-memory implementation of the complete greenspacedb storage
//! contract. Backs the integration tests and embedded deployments.
//!
//! The store enforces the constraints the repositories document:
//! unique user external ids, at most one favorite per
//! (user, green space) pair, at most one registration per
//! (event, user) pair and compare-and-set content request status
//! transitions. Each mutation holds a single write lock, so the
//! check and the write happen atomically with respect to other
//! callers.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use gsdb_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MemoryDb {
    users: RwLock<Vec<User>>,
    green_spaces: RwLock<Vec<GreenSpace>>,
    events: RwLock<Vec<Event>>,
    content_requests: RwLock<Vec<ContentRequest>>,
    favorites: RwLock<Vec<Favorite>>,
    registrations: RwLock<Vec<EventRegistration>>,
}

fn read<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockReadGuard<'_, Vec<T>>> {
    lock.read()
        .map_err(|_| Error::Other(anyhow!("Storage lock poisoned")))
}

fn write<T>(lock: &RwLock<Vec<T>>) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
    lock.write()
        .map_err(|_| Error::Other(anyhow!("Storage lock poisoned")))
}

impl UserRepo for MemoryDb {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut users = write(&self.users)?;
        if users
            .iter()
            .any(|u| u.id == user.id || u.external_id == user.external_id)
        {
            return Err(Error::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let mut users = write(&self.users)?;
        let pos = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or(Error::NotFound)?;
        users[pos] = user.clone();
        Ok(())
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = write(&self.users)?;
        let pos = users
            .iter()
            .position(|u| u.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        users.remove(pos);
        Ok(())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        read(&self.users)?
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn try_get_user_by_external_id(&self, external_id: &str) -> Result<Option<User>> {
        Ok(read(&self.users)?
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(read(&self.users)?.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(read(&self.users)?.len())
    }
}

impl GreenSpaceRepo for MemoryDb {
    fn create_green_space(&self, green_space: GreenSpace) -> Result<()> {
        let mut green_spaces = write(&self.green_spaces)?;
        if green_spaces.iter().any(|g| g.id == green_space.id) {
            return Err(Error::AlreadyExists);
        }
        green_spaces.push(green_space);
        Ok(())
    }

    fn update_green_space(&self, green_space: &GreenSpace) -> Result<()> {
        let mut green_spaces = write(&self.green_spaces)?;
        let pos = green_spaces
            .iter()
            .position(|g| g.id == green_space.id)
            .ok_or(Error::NotFound)?;
        green_spaces[pos] = green_space.clone();
        Ok(())
    }

    fn delete_green_space(&self, id: &str) -> Result<()> {
        let mut green_spaces = write(&self.green_spaces)?;
        let pos = green_spaces
            .iter()
            .position(|g| g.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        green_spaces.remove(pos);
        Ok(())
    }

    fn get_green_space(&self, id: &str) -> Result<GreenSpace> {
        read(&self.green_spaces)?
            .iter()
            .find(|g| g.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_green_spaces(&self) -> Result<Vec<GreenSpace>> {
        Ok(read(&self.green_spaces)?.clone())
    }

    fn count_green_spaces(&self) -> Result<usize> {
        Ok(read(&self.green_spaces)?.len())
    }
}

impl EventRepo for MemoryDb {
    fn create_event(&self, event: Event) -> Result<()> {
        let mut events = write(&self.events)?;
        if events.iter().any(|e| e.id == event.id) {
            return Err(Error::AlreadyExists);
        }
        events.push(event);
        Ok(())
    }

    fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = write(&self.events)?;
        let pos = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or(Error::NotFound)?;
        events[pos] = event.clone();
        Ok(())
    }

    fn get_event(&self, id: &str) -> Result<Event> {
        read(&self.events)?
            .iter()
            .find(|e| e.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_events(&self) -> Result<Vec<Event>> {
        Ok(read(&self.events)?.clone())
    }

    fn count_events(&self) -> Result<usize> {
        Ok(read(&self.events)?.len())
    }
}

impl ContentRequestRepo for MemoryDb {
    fn create_content_request(&self, request: &ContentRequest) -> Result<()> {
        let mut requests = write(&self.content_requests)?;
        if requests.iter().any(|r| r.id == request.id) {
            return Err(Error::AlreadyExists);
        }
        requests.push(request.clone());
        Ok(())
    }

    fn get_content_request(&self, id: &str) -> Result<ContentRequest> {
        read(&self.content_requests)?
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_content_requests(&self) -> Result<Vec<ContentRequest>> {
        Ok(read(&self.content_requests)?.clone())
    }

    fn content_requests_by_submitter(&self, submitter_id: &str) -> Result<Vec<ContentRequest>> {
        Ok(read(&self.content_requests)?
            .iter()
            .filter(|r| r.submitter.as_str() == submitter_id)
            .cloned()
            .collect())
    }

    fn update_content_request_status(
        &self,
        id: &str,
        expected: RequestStatus,
        next: RequestStatus,
        at: Timestamp,
    ) -> Result<()> {
        // Check and write under one lock: the losing writer of two
        // concurrent transitions observes `Conflict`.
        let mut requests = write(&self.content_requests)?;
        let request = requests
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or(Error::NotFound)?;
        if request.status != expected {
            return Err(Error::Conflict);
        }
        request.status = next;
        request.updated_at = at;
        Ok(())
    }
}

impl FavoriteRepo for MemoryDb {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
        let mut favorites = write(&self.favorites)?;
        if favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.green_space_id == favorite.green_space_id)
        {
            return Err(Error::AlreadyExists);
        }
        favorites.push(favorite.clone());
        Ok(())
    }

    fn delete_favorite(&self, user_id: &str, green_space_id: &str) -> Result<()> {
        let mut favorites = write(&self.favorites)?;
        let pos = favorites
            .iter()
            .position(|f| {
                f.user_id.as_str() == user_id && f.green_space_id.as_str() == green_space_id
            })
            .ok_or(Error::NotFound)?;
        favorites.remove(pos);
        Ok(())
    }

    fn try_get_favorite(&self, user_id: &str, green_space_id: &str) -> Result<Option<Favorite>> {
        Ok(read(&self.favorites)?
            .iter()
            .find(|f| f.user_id.as_str() == user_id && f.green_space_id.as_str() == green_space_id)
            .cloned())
    }

    fn favorites_by_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        Ok(read(&self.favorites)?
            .iter()
            .filter(|f| f.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl RegistrationRepo for MemoryDb {
    fn create_registration(&self, registration: &EventRegistration) -> Result<()> {
        let mut registrations = write(&self.registrations)?;
        if registrations
            .iter()
            .any(|r| r.event_id == registration.event_id && r.user_id == registration.user_id)
        {
            return Err(Error::AlreadyExists);
        }
        registrations.push(registration.clone());
        Ok(())
    }

    fn delete_registration(&self, event_id: &str, user_id: &str) -> Result<()> {
        let mut registrations = write(&self.registrations)?;
        let pos = registrations
            .iter()
            .position(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
            .ok_or(Error::NotFound)?;
        registrations.remove(pos);
        Ok(())
    }

    fn try_get_registration(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Option<EventRegistration>> {
        Ok(read(&self.registrations)?
            .iter()
            .find(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
            .cloned())
    }

    fn registrations_by_user(&self, user_id: &str) -> Result<Vec<EventRegistration>> {
        Ok(read(&self.registrations)?
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}
