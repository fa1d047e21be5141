use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use dioxus::html::FileEngine;

/// One uploaded file, already inlined for storage in the content blob.
pub struct InlineFile {
    pub data_url: String,
    pub name: String,
}

/// Reads the first selected file and inlines it as a `data:` URL. The site
/// has no asset server; uploaded bytes live inside the persisted content
/// object itself.
pub async fn read_first_file(engine: Arc<dyn FileEngine>) -> Option<InlineFile> {
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;

    let mime = mime_guess::from_path(&name).first_or_octet_stream();
    let data_url = format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(&bytes));

    Some(InlineFile { data_url, name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_shape() {
        // the encoding half of read_first_file, without a browser file
        let mime = mime_guess::from_path("photo.png").first_or_octet_stream();
        let url = format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(b"abc"));

        assert_eq!(url, "data:image/png;base64,YWJj");
    }
}
