//! Portrait export

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use forge_domain::GenerationResult;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageExportError {
    #[error("no portrait to save")]
    NoImage,

    #[error("portrait data is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("could not write portrait: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode the portrait of `result` and write the JPEG bytes to `path`.
///
/// Returns the number of bytes written.
pub fn save_image(result: &GenerationResult, path: &Path) -> Result<usize, ImageExportError> {
    let payload = result.image_payload().ok_or(ImageExportError::NoImage)?;
    let bytes = BASE64.decode(payload.trim())?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    Ok(bytes.len())
}
