use gsdb_core::gateways::identity::IdentityGateway;

use super::*;
use usecases::Error;

/// Records a change proposal on behalf of the signed-in user.
pub fn submit_content_request<D: Db>(
    db: &D,
    identities: &dyn IdentityGateway,
    payload: RequestPayload,
) -> Result<Id> {
    let submitter = usecases::resolve_current_user(db, identities)?.ok_or(Error::Unauthorized)?;
    let request_id = usecases::submit_content_request(db, &submitter, payload).map_err(|err| {
        warn!("Failed to submit content request: {err}");
        err
    })?;
    Ok(request_id)
}
