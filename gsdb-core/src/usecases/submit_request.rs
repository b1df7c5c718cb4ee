use gsdb_boundary::encode_payload;

use super::prelude::*;

/// Records a user's change proposal for later moderation.
///
/// The payload is validated the way the submission forms are expected
/// to, then encoded and stored with status `pending`.
pub fn submit_content_request<R>(
    repo: &R,
    submitter: &User,
    payload: RequestPayload,
) -> Result<Id>
where
    R: ContentRequestRepo,
{
    validate_payload(&payload)?;
    let encoded = encode_payload(&payload)?;
    let now = Timestamp::now();
    let request = ContentRequest {
        id: Id::new(),
        submitter: submitter.id.clone(),
        kind: payload.kind(),
        status: RequestStatus::Pending,
        payload: encoded,
        created_at: now,
        updated_at: now,
    };
    log::info!(
        "User {} submitted \"{}\" request {}",
        request.submitter,
        request.kind,
        request.id
    );
    repo.create_content_request(&request)?;
    Ok(request.id)
}

fn validate_payload(payload: &RequestPayload) -> Result<()> {
    match payload {
        RequestPayload::AddEvent(draft) => {
            if draft.name.trim().is_empty() {
                return Err(Error::Name);
            }
            let start = draft.start_time.parse::<TimeOfDay>()?;
            let end = draft.end_time.parse::<TimeOfDay>()?;
            if end <= start {
                return Err(Error::EndTimeBeforeStart);
            }
        }
        RequestPayload::AddGreenSpace(draft) => {
            if draft.name.trim().is_empty() {
                return Err(Error::Name);
            }
            if !draft.entry_price.is_finite() || draft.entry_price < 0.0 {
                return Err(Error::EntryPrice);
            }
            draft.working_days.parse::<WorkingDays>()?;
        }
        RequestPayload::UpdateGreenSpace(draft) => {
            if !draft.green_space_id.is_valid() {
                return Err(Error::TargetNotFound);
            }
            if let Some(name) = &draft.name {
                if name.trim().is_empty() {
                    return Err(Error::Name);
                }
            }
            if let Some(entry_price) = draft.entry_price {
                if !entry_price.is_finite() || entry_price < 0.0 {
                    return Err(Error::EntryPrice);
                }
            }
            if let Some(working_days) = &draft.working_days {
                working_days.parse::<WorkingDays>()?;
            }
        }
    }
    Ok(())
}
