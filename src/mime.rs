//! Extension-to-MIME lookup for inlined image data URIs.

use std::path::Path;

/// MIME type for an image path, from its lower-cased extension.
///
/// Unknown extensions map to `application/octet-stream`; in practice the
/// content classifier only routes the known image extensions here.
pub fn mime_type(path: &Path) -> &'static str {
    let ext = path.extension().map(|e| e.to_ascii_lowercase());
    match ext.as_deref().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_variants() {
        assert_eq!(mime_type(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("a.jpeg")), "image/jpeg");
    }

    #[test]
    fn uppercase_extension() {
        assert_eq!(mime_type(Path::new("photo.PNG")), "image/png");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_type(Path::new("a.tiff")), "application/octet-stream");
        assert_eq!(mime_type(Path::new("no-extension")), "application/octet-stream");
    }

    #[test]
    fn remaining_image_types() {
        assert_eq!(mime_type(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_type(Path::new("a.bmp")), "image/bmp");
        assert_eq!(mime_type(Path::new("a.webp")), "image/webp");
    }
}
