use super::prelude::*;

/// Registers the user for an event.
///
/// Joining twice short-circuits to the existing registration id; no
/// second row is created.
pub fn join_event<R>(repo: &R, user: &User, event_id: &Id) -> Result<Id>
where
    R: RegistrationRepo,
{
    let registration = EventRegistration {
        id: Id::new(),
        event_id: event_id.clone(),
        user_id: user.id.clone(),
        registered_at: Timestamp::now(),
    };
    match repo.create_registration(&registration) {
        Ok(()) => {
            log::debug!("User {} joined event {event_id}", user.id);
            Ok(registration.id)
        }
        Err(RepoError::AlreadyExists) => {
            let existing = repo
                .try_get_registration(event_id.as_str(), user.id.as_str())?
                .ok_or(RepoError::NotFound)?;
            Ok(existing.id)
        }
        Err(err) => Err(err.into()),
    }
}

/// Leaving an event the user never joined is a no-op success.
pub fn leave_event<R>(repo: &R, user: &User, event_id: &Id) -> Result<Option<Id>>
where
    R: RegistrationRepo,
{
    let Some(registration) = repo.try_get_registration(event_id.as_str(), user.id.as_str())?
    else {
        return Ok(None);
    };
    match repo.delete_registration(event_id.as_str(), user.id.as_str()) {
        Ok(()) => Ok(Some(registration.id)),
        Err(RepoError::NotFound) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn is_registered<R>(repo: &R, user: &User, event_id: &Id) -> Result<bool>
where
    R: RegistrationRepo,
{
    Ok(repo
        .try_get_registration(event_id.as_str(), user.id.as_str())?
        .is_some())
}

/// An event the user has joined.
#[derive(Debug, Clone)]
pub struct JoinedEvent {
    pub event: Event,
    pub registered_at: Timestamp,
}

pub fn joined_events<R>(repo: &R, user: &User) -> Result<Vec<JoinedEvent>>
where
    R: RegistrationRepo + EventRepo,
{
    let registrations = repo.registrations_by_user(user.id.as_str())?;
    let mut results = Vec::with_capacity(registrations.len());
    for registration in registrations {
        match repo.get_event(registration.event_id.as_str()) {
            Ok(event) => results.push(JoinedEvent {
                event,
                registered_at: registration.registered_at,
            }),
            // Registrations may outlive their event.
            Err(RepoError::NotFound) => (),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(results)
}
