use std::cell::RefCell;

use anyhow::Result as Fallible;
use url::Url;

use crate::{
    entities::*,
    gateways::{
        identity::{Identity, IdentityGateway},
        images::ImageStorageGateway,
    },
    repositories::*,
};

type RepoResult<T> = std::result::Result<T, Error>;

trait EntityId {
    fn id(&self) -> &str;
}

impl EntityId for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for GreenSpace {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for Event {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for ContentRequest {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for Favorite {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl EntityId for EventRegistration {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + EntityId>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(Error::NotFound),
    }
}

fn create<T: Clone + EntityId>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(Error::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + EntityId>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(Error::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + EntityId>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(Error::NotFound);
    }
    Ok(())
}

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub green_spaces: RefCell<Vec<GreenSpace>>,
    pub events: RefCell<Vec<Event>>,
    pub content_requests: RefCell<Vec<ContentRequest>>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub registrations: RefCell<Vec<EventRegistration>>,
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.external_id == user.external_id)
        {
            return Err(Error::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }

    fn delete_user(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.users.borrow_mut(), id)
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }

    fn try_get_user_by_external_id(&self, external_id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        self.all_users().map(|v| v.len())
    }
}

impl GreenSpaceRepo for MockDb {
    fn create_green_space(&self, green_space: GreenSpace) -> RepoResult<()> {
        create(&mut self.green_spaces.borrow_mut(), green_space)
    }

    fn update_green_space(&self, green_space: &GreenSpace) -> RepoResult<()> {
        update(&mut self.green_spaces.borrow_mut(), green_space)
    }

    fn delete_green_space(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.green_spaces.borrow_mut(), id)
    }

    fn get_green_space(&self, id: &str) -> RepoResult<GreenSpace> {
        get(&self.green_spaces.borrow(), id)
    }

    fn all_green_spaces(&self) -> RepoResult<Vec<GreenSpace>> {
        Ok(self.green_spaces.borrow().clone())
    }

    fn count_green_spaces(&self) -> RepoResult<usize> {
        self.all_green_spaces().map(|v| v.len())
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: Event) -> RepoResult<()> {
        create(&mut self.events.borrow_mut(), event)
    }

    fn update_event(&self, event: &Event) -> RepoResult<()> {
        update(&mut self.events.borrow_mut(), event)
    }

    fn get_event(&self, id: &str) -> RepoResult<Event> {
        get(&self.events.borrow(), id)
    }

    fn all_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.borrow().clone())
    }

    fn count_events(&self) -> RepoResult<usize> {
        self.all_events().map(|v| v.len())
    }
}

impl ContentRequestRepo for MockDb {
    fn create_content_request(&self, request: &ContentRequest) -> RepoResult<()> {
        create(&mut self.content_requests.borrow_mut(), request.clone())
    }

    fn get_content_request(&self, id: &str) -> RepoResult<ContentRequest> {
        get(&self.content_requests.borrow(), id)
    }

    fn all_content_requests(&self) -> RepoResult<Vec<ContentRequest>> {
        Ok(self.content_requests.borrow().clone())
    }

    fn content_requests_by_submitter(&self, submitter_id: &str) -> RepoResult<Vec<ContentRequest>> {
        Ok(self
            .content_requests
            .borrow()
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
    ) -> RepoResult<()> {
        let mut requests = self.content_requests.borrow_mut();
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

impl FavoriteRepo for MockDb {
    fn create_favorite(&self, favorite: &Favorite) -> RepoResult<()> {
        if self
            .favorites
            .borrow()
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.green_space_id == favorite.green_space_id)
        {
            return Err(Error::AlreadyExists);
        }
        create(&mut self.favorites.borrow_mut(), favorite.clone())
    }

    fn delete_favorite(&self, user_id: &str, green_space_id: &str) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        if let Some(pos) = favorites.iter().position(|f| {
            f.user_id.as_str() == user_id && f.green_space_id.as_str() == green_space_id
        }) {
            favorites.remove(pos);
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    fn try_get_favorite(
        &self,
        user_id: &str,
        green_space_id: &str,
    ) -> RepoResult<Option<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .find(|f| {
                f.user_id.as_str() == user_id && f.green_space_id.as_str() == green_space_id
            })
            .cloned())
    }

    fn favorites_by_user(&self, user_id: &str) -> RepoResult<Vec<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .filter(|f| f.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl RegistrationRepo for MockDb {
    fn create_registration(&self, registration: &EventRegistration) -> RepoResult<()> {
        if self
            .registrations
            .borrow()
            .iter()
            .any(|r| r.event_id == registration.event_id && r.user_id == registration.user_id)
        {
            return Err(Error::AlreadyExists);
        }
        create(&mut self.registrations.borrow_mut(), registration.clone())
    }

    fn delete_registration(&self, event_id: &str, user_id: &str) -> RepoResult<()> {
        let mut registrations = self.registrations.borrow_mut();
        if let Some(pos) = registrations
            .iter()
            .position(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
        {
            registrations.remove(pos);
            Ok(())
        } else {
            Err(Error::NotFound)
        }
    }

    fn try_get_registration(
        &self,
        event_id: &str,
        user_id: &str,
    ) -> RepoResult<Option<EventRegistration>> {
        Ok(self
            .registrations
            .borrow()
            .iter()
            .find(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
            .cloned())
    }

    fn registrations_by_user(&self, user_id: &str) -> RepoResult<Vec<EventRegistration>> {
        Ok(self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

/// Deterministic image storage: every reference resolves to an URL
/// below `https://images.test/`, references prefixed with `gone:`
/// resolve to nothing.
pub struct DummyImageGW;

impl ImageStorageGateway for DummyImageGW {
    fn generate_upload_url(&self) -> Fallible<Url> {
        Ok("https://images.test/upload".parse()?)
    }

    fn resolve_url(&self, image: &ImageRef) -> Fallible<Option<Url>> {
        if image.as_str().starts_with("gone:") {
            return Ok(None);
        }
        Ok(Some(format!("https://images.test/{image}").parse()?))
    }
}

pub struct FixedIdentityGW(pub Option<Identity>);

impl IdentityGateway for FixedIdentityGW {
    fn current_identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}

pub fn member(id: &str) -> User {
    User {
        id: id.into(),
        external_id: format!("ext-{id}"),
        first_name: "Test".into(),
        last_name: "User".into(),
        email: format!("{id}@users.test"),
        phone: "".into(),
        image_url: "".into(),
        is_admin: false,
        is_active: true,
    }
}

pub fn admin(id: &str) -> User {
    User {
        is_admin: true,
        ..member(id)
    }
}
