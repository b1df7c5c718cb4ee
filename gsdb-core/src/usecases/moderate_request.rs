use gsdb_boundary::decode_payload;

use super::prelude::*;
use super::{create_event, create_green_space, update_green_space, NewEvent, NewGreenSpace};
use crate::authorization::authorize_admin;

/// The live-entity mutation an approval performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovedChange {
    CreatedEvent(Id),
    CreatedGreenSpace(Id),
    UpdatedGreenSpace(Id),
}

/// Approves a pending content request and materializes its payload.
///
/// Either the live entity is created/updated AND the status flips to
/// `approved`, or neither happens: every failure before the final
/// transition leaves the request pending and actionable.
pub fn approve_content_request<R>(repo: &R, admin: &User, id: &Id) -> Result<ApprovedChange>
where
    R: ContentRequestRepo + GreenSpaceRepo + EventRepo,
{
    authorize_admin(admin)?;
    let request = repo.get_content_request(id.as_str())?;
    if request.status.is_terminal() {
        return Err(Error::RequestNotPending);
    }
    let payload = decode_payload(&request.payload)?;
    let change = match payload {
        RequestPayload::AddEvent(draft) => {
            let EventDraft {
                name,
                category,
                date,
                start_time,
                end_time,
                description,
                location,
            } = draft;
            let event = create_event(
                repo,
                NewEvent {
                    name,
                    category,
                    date,
                    start_time,
                    end_time,
                    description,
                    location,
                },
            )?;
            ApprovedChange::CreatedEvent(event.id)
        }
        RequestPayload::AddGreenSpace(draft) => {
            let GreenSpaceDraft {
                name,
                entry_price,
                plant_info,
                working_time,
                working_days,
                description,
                location,
                facilities,
                images,
            } = draft;
            let green_space = create_green_space(
                repo,
                NewGreenSpace {
                    name,
                    entry_price,
                    plant_info,
                    working_time,
                    working_days,
                    description,
                    location,
                    facilities,
                    images,
                    lat: None,
                    lng: None,
                },
            )?;
            ApprovedChange::CreatedGreenSpace(green_space.id)
        }
        RequestPayload::UpdateGreenSpace(draft) => {
            let target = draft.green_space_id.clone();
            let green_space =
                update_green_space(repo, &target, draft.into()).map_err(|err| match err {
                    // The target may have been deleted since the
                    // request was submitted.
                    Error::Repo(RepoError::NotFound) => Error::TargetNotFound,
                    err => err,
                })?;
            ApprovedChange::UpdatedGreenSpace(green_space.id)
        }
    };
    transition_request(repo, &request, RequestStatus::Approved)?;
    log::info!(
        "Approved \"{}\" request {} from user {}",
        request.kind,
        request.id,
        request.submitter
    );
    Ok(change)
}

/// Rejects a pending content request. No materialization side effect.
pub fn reject_content_request<R>(repo: &R, admin: &User, id: &Id) -> Result<()>
where
    R: ContentRequestRepo,
{
    authorize_admin(admin)?;
    let request = repo.get_content_request(id.as_str())?;
    if request.status.is_terminal() {
        return Err(Error::RequestNotPending);
    }
    transition_request(repo, &request, RequestStatus::Rejected)?;
    log::info!(
        "Rejected \"{}\" request {} from user {}",
        request.kind,
        request.id,
        request.submitter
    );
    Ok(())
}

fn transition_request<R>(repo: &R, request: &ContentRequest, next: RequestStatus) -> Result<()>
where
    R: ContentRequestRepo,
{
    debug_assert!(next.is_terminal());
    repo.update_content_request_status(
        request.id.as_str(),
        RequestStatus::Pending,
        next,
        Timestamp::now(),
    )
    .map_err(|err| match err {
        // A concurrent moderator decided first.
        RepoError::Conflict => Error::RequestNotPending,
        err => Error::Repo(err),
    })
}
