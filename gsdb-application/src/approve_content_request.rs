use gsdb_core::gateways::identity::IdentityGateway;

use super::*;
use usecases::{ApprovedChange, Error};

/// Approves a pending content request on behalf of the signed-in
/// administrator and materializes the proposed change.
///
/// The request keeps its `pending` status whenever the
/// materialization fails, so the admin can act on it again.
pub fn approve_content_request<D: Db>(
    db: &D,
    identities: &dyn IdentityGateway,
    request_id: &Id,
) -> Result<ApprovedChange> {
    let admin = usecases::resolve_current_user(db, identities)?.ok_or(Error::Unauthorized)?;
    let change = usecases::approve_content_request(db, &admin, request_id).map_err(|err| {
        warn!("Failed to approve content request {request_id}: {err}");
        err
    })?;
    Ok(change)
}
