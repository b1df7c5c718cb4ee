use gsdb_boundary::decode_payload;
use url::Url;

use super::prelude::*;
use super::resolve_image_urls;
use crate::gateways::images::ImageStorageGateway;

/// A content request prepared for display.
#[derive(Debug, Clone)]
pub struct ContentRequestView {
    pub request: ContentRequest,
    // `None` if the stored payload cannot be decoded; the request
    // itself remains listed so it can still be rejected.
    pub payload: Option<RequestPayload>,
    pub image_urls: Vec<Url>,
}

/// All content requests with decoded payloads and resolved images.
///
/// An undecodable payload never aborts the listing.
pub fn load_content_requests<R>(
    repo: &R,
    images: &dyn ImageStorageGateway,
) -> Result<Vec<ContentRequestView>>
where
    R: ContentRequestRepo,
{
    let requests = repo.all_content_requests()?;
    let mut views = Vec::with_capacity(requests.len());
    for request in requests {
        let payload = match decode_payload(&request.payload) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::warn!("Undecodable payload on content request {}: {err}", request.id);
                None
            }
        };
        let image_refs: &[ImageRef] = match &payload {
            Some(RequestPayload::AddGreenSpace(draft)) => &draft.images,
            Some(RequestPayload::UpdateGreenSpace(draft)) => {
                draft.images.as_deref().unwrap_or(&[])
            }
            _ => &[],
        };
        let image_urls = resolve_image_urls(images, image_refs)?;
        views.push(ContentRequestView {
            request,
            payload,
            image_urls,
        });
    }
    Ok(views)
}

pub fn content_requests_of_user<R>(repo: &R, user: &User) -> Result<Vec<ContentRequest>>
where
    R: ContentRequestRepo,
{
    Ok(repo.content_requests_by_submitter(user.id.as_str())?)
}
