//! Image loading from filesystem paths, `file://` and `data:` URLs.

use crate::renderer::{RenderError, RenderResult};
use base64::{Engine, engine::general_purpose::STANDARD};
use image::RgbaImage;
use std::path::PathBuf;
use url::Url;

/// Load and decode the image addressed by `image_url`.
///
/// Accepts a plain filesystem path, a `file://` URL, or a base64 `data:`
/// URL. Remote schemes are rejected; fetching is the caller's job.
pub fn load_image(image_url: &str) -> RenderResult<RgbaImage> {
    let bytes = read_source(image_url)?;
    let decoded = image::load_from_memory(&bytes).map_err(|e| load_error(image_url, e.to_string()))?;
    let rgba = decoded.to_rgba8();
    log::debug!("Decoded {} ({}x{})", describe(image_url), rgba.width(), rgba.height());
    Ok(rgba)
}

fn read_source(image_url: &str) -> RenderResult<Vec<u8>> {
    if let Some(rest) = image_url.strip_prefix("data:") {
        return decode_data_url(image_url, rest);
    }

    let path = match Url::parse(image_url) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| load_error(image_url, "not a valid file path".to_string()))?,
        // Windows drive letters parse as one-letter schemes.
        Ok(url) if url.scheme().len() == 1 => PathBuf::from(image_url),
        Ok(url) => {
            return Err(load_error(image_url, format!("unsupported URL scheme '{}'", url.scheme())));
        }
        Err(_) => PathBuf::from(image_url),
    };

    std::fs::read(&path).map_err(|e| load_error(image_url, format!("failed to read {}: {}", path.display(), e)))
}

fn decode_data_url(image_url: &str, rest: &str) -> RenderResult<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| load_error(image_url, "malformed data URL".to_string()))?;
    if !meta.split(';').any(|part| part.eq_ignore_ascii_case("base64")) {
        return Err(load_error(image_url, "only base64 data URLs are supported".to_string()));
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| load_error(image_url, format!("invalid base64 payload: {}", e)))
}

fn load_error(image_url: &str, reason: String) -> RenderError {
    RenderError::ImageLoad {
        url: describe(image_url),
        reason,
    }
}

/// Data URLs can be megabytes long; keep errors and logs readable.
fn describe(image_url: &str) -> String {
    const MAX_LEN: usize = 64;
    if image_url.len() <= MAX_LEN {
        return image_url.to_string();
    }
    let cut = (0..=MAX_LEN).rev().find(|&i| image_url.is_char_boundary(i)).unwrap_or(0);
    format!("{}...", &image_url[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]));
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_load_data_url() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(6, 3)));
        let image = load_image(&url).unwrap();
        assert_eq!(image.dimensions(), (6, 3));
        assert_eq!(*image.get_pixel(2, 1), Rgba([0, 128, 255, 255]));
    }

    #[test]
    fn test_load_path_and_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        std::fs::write(&path, png_bytes(4, 5)).unwrap();

        let image = load_image(path.to_str().unwrap()).unwrap();
        assert_eq!(image.dimensions(), (4, 5));

        let file_url = Url::from_file_path(&path).unwrap();
        let image = load_image(file_url.as_str()).unwrap();
        assert_eq!(image.dimensions(), (4, 5));
    }

    #[test]
    fn test_missing_file() {
        let result = load_image("/definitely/not/here.png");
        assert!(matches!(result, Err(RenderError::ImageLoad { .. })));
    }

    #[test]
    fn test_remote_scheme_rejected() {
        let err = load_image("https://storage.example.com/bucket/face.jpg").unwrap_err();
        match err {
            RenderError::ImageLoad { reason, .. } => assert!(reason.contains("https")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_undecodable_bytes() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(b"not an image at all"));
        assert!(matches!(load_image(&url), Err(RenderError::ImageLoad { .. })));
    }

    #[test]
    fn test_non_base64_data_url_rejected() {
        assert!(matches!(load_image("data:text/plain,hello"), Err(RenderError::ImageLoad { .. })));
        assert!(matches!(load_image("data:image/png;base64"), Err(RenderError::ImageLoad { .. })));
    }

    #[test]
    fn test_long_urls_truncated_in_errors() {
        let url = format!("data:image/png;base64,{}", "A".repeat(500));
        match load_image(&url).unwrap_err() {
            RenderError::ImageLoad { url, .. } => assert!(url.len() <= 67),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
