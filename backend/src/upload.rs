use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use image::ImageFormat;
use sha2::{Digest, Sha256};
use shared::upload::{is_accepted_mime, IMAGE_FIELD};

/// A validated image taken from the multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
    pub digest: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to read upload: {0}")]
    Multipart(String),
    #[error("No \"{0}\" field in the upload")]
    MissingImage(&'static str),
    #[error("The uploaded image is empty")]
    Empty,
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("Image exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("File content does not match its declared type {declared}")]
    ContentMismatch { declared: String },
}

pub fn calculate_image_hash(image_data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image_data);
    hex::encode(hasher.finalize())
}

/// Checks the declared type, the size and that the bytes really are that type.
pub fn validate_image(mime: &str, image_data: &[u8], max_bytes: usize) -> Result<(), UploadError> {
    if !is_accepted_mime(mime) {
        return Err(UploadError::UnsupportedType(mime.to_string()));
    }
    if image_data.is_empty() {
        return Err(UploadError::Empty);
    }
    if image_data.len() > max_bytes {
        return Err(UploadError::TooLarge { limit: max_bytes });
    }

    let expected = match mime {
        "image/png" => ImageFormat::Png,
        _ => ImageFormat::Jpeg,
    };
    match image::guess_format(image_data) {
        Ok(format) if format == expected => Ok(()),
        _ => Err(UploadError::ContentMismatch {
            declared: mime.to_string(),
        }),
    }
}

/// Reads the `image` field from the request; other fields are skipped.
pub async fn read_image(mut payload: Multipart, max_bytes: usize) -> Result<ImageUpload, UploadError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            while field
                .try_next()
                .await
                .map_err(|e| UploadError::Multipart(e.to_string()))?
                .is_some()
            {}
            continue;
        }

        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        if !is_accepted_mime(&mime) {
            return Err(UploadError::UnsupportedType(mime));
        }
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        validate_image(&mime, &bytes, max_bytes)?;
        let digest = calculate_image_hash(&bytes);
        return Ok(ImageUpload {
            file_name,
            mime,
            bytes,
            digest,
        });
    }

    Err(UploadError::MissingImage(IMAGE_FIELD))
}
