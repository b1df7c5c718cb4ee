use super::prelude::*;

pub fn get_event<R: EventRepo>(repo: &R, id: &Id) -> Result<Event> {
    Ok(repo.get_event(id.as_str())?)
}

/// All events in chronological order: by date, then by start time.
pub fn query_events<R: EventRepo>(repo: &R) -> Result<Vec<Event>> {
    let mut events = repo.all_events()?;
    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    Ok(events)
}
