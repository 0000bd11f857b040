use crate::errors::{AppError, AppResult};
use crate::models::Photo;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use uuid::Uuid;

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}

/// Encode raw image bytes as a `data:` URL.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Read an image file and wrap it as a proof photo.
pub fn load_photo(path: &Path, now: DateTime<Local>) -> AppResult<Photo> {
    let mime = mime_for(path).ok_or_else(|| {
        AppError::InvalidPhoto(format!(
            "unsupported image type: {} (use jpg, png, gif, webp or heic)",
            path.display()
        ))
    })?;

    let bytes = fs::read(path)?;

    Ok(Photo {
        id: Uuid::new_v4().to_string(),
        data_url: to_data_url(mime, &bytes),
        timestamp: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_format() {
        assert_eq!(to_data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_photo(Path::new("proof.txt"), Local::now()).unwrap_err();
        assert!(matches!(err, AppError::InvalidPhoto(_)));
    }

    #[test]
    fn reads_image_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("drivepay_photo_{}.JPG", std::process::id()));
        fs::write(&path, [0xffu8, 0xd8, 0xff]).unwrap();

        let photo = load_photo(&path, Local::now()).unwrap();
        assert_eq!(photo.data_url, "data:image/jpeg;base64,/9j/");
        fs::remove_file(&path).ok();
    }
}
