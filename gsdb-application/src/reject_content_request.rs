use gsdb_core::gateways::identity::IdentityGateway;

use super::*;
use usecases::Error;

/// Rejects a pending content request on behalf of the signed-in
/// administrator. The proposal is discarded, nothing is materialized.
pub fn reject_content_request<D: Db>(
    db: &D,
    identities: &dyn IdentityGateway,
    request_id: &Id,
) -> Result<()> {
    let admin = usecases::resolve_current_user(db, identities)?.ok_or(Error::Unauthorized)?;
    usecases::reject_content_request(db, &admin, request_id).map_err(|err| {
        warn!("Failed to reject content request {request_id}: {err}");
        err
    })?;
    Ok(())
}
