use anyhow::Result;
use url::Url;

use gsdb_entities::image::ImageRef;

/// External binary object storage for images.
///
/// Clients POST image bytes to a freshly generated upload URL and
/// receive the storage reference in return. References are resolved
/// to retrievable URLs on every read.
pub trait ImageStorageGateway {
    fn generate_upload_url(&self) -> Result<Url>;

    /// `None` if the referenced object no longer exists.
    fn resolve_url(&self, image: &ImageRef) -> Result<Option<Url>>;
}
