use compute::{DashboardError, Result};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const PDF_MIME: &str = "application/pdf";

/// Offers `bytes` to the user as a file download.
///
/// The object URL only lives for the duration of the click; it is revoked
/// before returning, whether or not the anchor could be attached.
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<()> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|_| DashboardError::Download("Failed to create blob".into()))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| DashboardError::Download("Unable to create object URL".into()))?;

    let result = click_anchor(&url, filename);
    if Url::revoke_object_url(&url).is_err() {
        log::warn!("Failed to revoke object URL for {}", filename);
    }
    result
}

fn click_anchor(url: &str, filename: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DashboardError::Download("Document unavailable".into()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| DashboardError::Download("Unable to create anchor".into()))?
        .dyn_into()
        .map_err(|_| DashboardError::Download("Anchor cast failed".into()))?;
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.set_hidden(true);

    let body = document
        .body()
        .ok_or_else(|| DashboardError::Download("Missing body".into()))?;
    body.append_child(&anchor)
        .map_err(|_| DashboardError::Download("Unable to attach anchor".into()))?;

    log::debug!("Triggering download of {}", filename);
    anchor.click();
    anchor.remove();
    Ok(())
}
