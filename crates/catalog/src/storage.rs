use url::Url;
use uuid::Uuid;

pub const ASSETS_BUCKET: &str = "portfolio-assets";
pub const AVATAR_PREFIX: &str = "avatar-";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage url cannot carry a path: {0}")]
    CannotBeABase(Url),
}

/// Unique object path for an uploaded file, keeping its extension.
pub fn asset_path(prefix: &str, file_name: &str) -> String {
    let id = Uuid::new_v4();

    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{prefix}{id}.{ext}")
        }
        _ => format!("{prefix}{id}"),
    }
}

/// Public URL of an object: `{base}/storage/v1/object/public/{bucket}/{path}`.
pub fn public_url(base: &Url, bucket: &str, path: &str) -> Result<Url, StorageError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| StorageError::CannotBeABase(base.clone()))?
        .pop_if_empty()
        .extend(["storage", "v1", "object", "public", bucket])
        .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url)
}
