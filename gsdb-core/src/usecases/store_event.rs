use super::prelude::*;
use crate::util::validate::Validate;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name        : String,
    pub category    : String,
    pub date        : String,
    pub start_time  : String,
    pub end_time    : String,
    pub description : String,
    // Green space id of the venue.
    pub location    : String,
}

pub fn create_event<R>(repo: &R, e: NewEvent) -> Result<Event>
where
    R: EventRepo,
{
    let NewEvent {
        name,
        category,
        date,
        start_time,
        end_time,
        description,
        location,
    } = e;
    let start_time = start_time.parse::<TimeOfDay>()?;
    let end_time = end_time.parse::<TimeOfDay>()?;
    let event = Event {
        id: Id::new(),
        name,
        category,
        date,
        start_time,
        end_time,
        description,
        location: location.into(),
    };
    event.validate()?;
    log::debug!("Storing newly created event: {:?}", event);
    repo.create_event(event.clone())?;
    Ok(event)
}

/// Partial update of an event; absent fields stay untouched.
/// Events are only updated directly by administrators, never through
/// the moderation path.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name        : Option<String>,
    pub category    : Option<String>,
    pub date        : Option<String>,
    pub start_time  : Option<String>,
    pub end_time    : Option<String>,
    pub description : Option<String>,
    pub location    : Option<String>,
}

pub fn update_event<R>(repo: &R, id: &Id, patch: EventPatch) -> Result<Event>
where
    R: EventRepo,
{
    let mut event = repo.get_event(id.as_str())?;
    let EventPatch {
        name,
        category,
        date,
        start_time,
        end_time,
        description,
        location,
    } = patch;
    if let Some(name) = name {
        event.name = name;
    }
    if let Some(category) = category {
        event.category = category;
    }
    if let Some(date) = date {
        event.date = date;
    }
    if let Some(start_time) = start_time {
        event.start_time = start_time.parse()?;
    }
    if let Some(end_time) = end_time {
        event.end_time = end_time.parse()?;
    }
    if let Some(description) = description {
        event.description = description;
    }
    if let Some(location) = location {
        event.location = location.into();
    }
    event.validate()?;
    log::debug!("Storing updated event: {:?}", event);
    repo.update_event(&event)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_event() -> NewEvent {
        NewEvent {
            name: "Morning Yoga".into(),
            category: "Wellness".into(),
            date: "2024-06-01".into(),
            start_time: "07:00".into(),
            end_time: "08:30".into(),
            description: "Open session".into(),
            location: "gs-1".into(),
        }
    }

    #[test]
    fn create_new_valid_event() {
        let db = MockDb::default();
        let created = create_event(&db, new_event()).unwrap();
        assert!(created.id.is_valid());
        assert_eq!(1, db.count_events().unwrap());
        let stored = &db.events.borrow()[0];
        assert_eq!("Morning Yoga", stored.name);
        assert_eq!("07:00", stored.start_time.to_string());
        assert_eq!(Id::from("gs-1"), stored.location);
    }

    #[test]
    fn create_event_with_unparsable_time() {
        let db = MockDb::default();
        let e = NewEvent {
            start_time: "early".into(),
            ..new_event()
        };
        assert!(matches!(create_event(&db, e), Err(Error::TimeOfDay)));
        assert_eq!(0, db.count_events().unwrap());
    }

    #[test]
    fn create_event_ending_before_it_starts() {
        let db = MockDb::default();
        let e = NewEvent {
            start_time: "09:00".into(),
            end_time: "08:00".into(),
            ..new_event()
        };
        assert!(matches!(create_event(&db, e), Err(Error::EndTimeBeforeStart)));
    }

    #[test]
    fn update_existing_event() {
        let db = MockDb::default();
        let created = create_event(&db, new_event()).unwrap();
        let patch = EventPatch {
            end_time: Some("09:00".into()),
            category: Some("Sport".into()),
            ..Default::default()
        };
        let updated = update_event(&db, &created.id, patch).unwrap();
        assert_eq!("09:00", updated.end_time.to_string());
        assert_eq!("Sport", updated.category);
        assert_eq!("Morning Yoga", updated.name);
    }

    #[test]
    fn update_missing_event() {
        let db = MockDb::default();
        let result = update_event(&db, &Id::new(), EventPatch::default());
        assert!(matches!(result, Err(Error::Repo(RepoError::NotFound))));
    }
}
