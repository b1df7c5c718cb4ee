use url::Url;

use super::prelude::*;
use crate::gateways::images::ImageStorageGateway;

/// A green space with its image references resolved for display.
#[derive(Debug, Clone)]
pub struct GreenSpaceView {
    pub green_space: GreenSpace,
    pub image_urls: Vec<Url>,
}

/// Resolves storage references to retrievable URLs.
///
/// References that no longer resolve are skipped; resolution happens
/// on every read and the resolved URLs are never written back.
pub fn resolve_image_urls(
    images: &dyn ImageStorageGateway,
    refs: &[ImageRef],
) -> Result<Vec<Url>> {
    let mut urls = Vec::with_capacity(refs.len());
    for image in refs {
        match images.resolve_url(image) {
            Ok(Some(url)) => urls.push(url),
            Ok(None) => log::warn!("Image {image} can no longer be resolved"),
            Err(err) => return Err(Error::Repo(RepoError::Other(err))),
        }
    }
    Ok(urls)
}

pub fn load_green_spaces<R>(
    repo: &R,
    images: &dyn ImageStorageGateway,
) -> Result<Vec<GreenSpaceView>>
where
    R: GreenSpaceRepo,
{
    repo.all_green_spaces()?
        .into_iter()
        .map(|green_space| {
            let image_urls = resolve_image_urls(images, &green_space.images)?;
            Ok(GreenSpaceView {
                green_space,
                image_urls,
            })
        })
        .collect()
}

pub fn get_green_space<R>(
    repo: &R,
    images: &dyn ImageStorageGateway,
    id: &Id,
) -> Result<GreenSpaceView>
where
    R: GreenSpaceRepo,
{
    let green_space = repo.get_green_space(id.as_str())?;
    let image_urls = resolve_image_urls(images, &green_space.images)?;
    Ok(GreenSpaceView {
        green_space,
        image_urls,
    })
}
