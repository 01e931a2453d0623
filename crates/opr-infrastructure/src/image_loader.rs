//! Image input boundary: turns a picked file into a slot payload.

use std::path::Path;

use opr_core::Result;
use opr_core::report::ImagePayload;

/// Infers the MIME type from a filename extension using the `mime_guess` library.
///
/// Falls back to `application/octet-stream` when the extension is unknown.
pub fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Reads an image file and encodes it as a `data:` URI payload.
///
/// The file is accepted as-is: no size limit, no check that it really is an
/// image.
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImagePayload> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let mime_type = infer_mime_type(path);

    tracing::debug!(
        path = %path.display(),
        mime_type = %mime_type,
        size = bytes.len(),
        "Loaded image for report slot"
    );

    Ok(ImagePayload::from_bytes(&mime_type, &bytes))
}
