use crate::config::UploadConfig;
use crate::core::errors::AppError;

/// 업로드 파일 메타데이터
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub mime_type: String,
    pub size_bytes: usize,
    pub filename: String,
}

/// 프로필 사진 업로드 검증 (형식과 크기)
pub struct PictureValidator;

impl PictureValidator {
    const ALLOWED_MIME_TYPES: &'static [&'static str] = &["image/png", "image/jpeg", "image/webp"];

    pub fn validate(metadata: &FileMetadata) -> Result<(), AppError> {
        if metadata.size_bytes > UploadConfig::MAX_PICTURE_BYTES {
            return Err(AppError::ValidationError(format!(
                "File size {} bytes exceeds 5MB limit",
                metadata.size_bytes
            )));
        }

        if !Self::ALLOWED_MIME_TYPES.contains(&metadata.mime_type.as_str()) {
            return Err(AppError::ValidationError(format!(
                "File type '{}' not allowed. Allowed types: PNG, JPEG, WebP",
                metadata.mime_type
            )));
        }

        Ok(())
    }

    /// MIME 타입에 대응하는 확장자 (점 제외)
    pub fn get_extension(mime_type: &str) -> &'static str {
        match mime_type {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(mime_type: &str, size_bytes: usize) -> FileMetadata {
        FileMetadata {
            mime_type: mime_type.to_string(),
            size_bytes,
            filename: "me".to_string(),
        }
    }

    #[test]
    fn test_accepts_supported_images() {
        assert!(PictureValidator::validate(&metadata("image/png", 1024 * 100)).is_ok());
        assert!(PictureValidator::validate(&metadata("image/jpeg", 1024 * 200)).is_ok());
        assert!(PictureValidator::validate(&metadata("image/webp", 1024 * 150)).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        let result = PictureValidator::validate(&metadata("text/plain", 1024));

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_rejects_oversized_file() {
        assert!(PictureValidator::validate(&metadata("image/png", 5 * 1024 * 1024)).is_ok());
        assert!(PictureValidator::validate(&metadata("image/png", 5 * 1024 * 1024 + 1)).is_err());
    }

    #[test]
    fn test_extension_from_mime_type() {
        assert_eq!(PictureValidator::get_extension("image/png"), "png");
        assert_eq!(PictureValidator::get_extension("image/jpeg"), "jpg");
        assert_eq!(PictureValidator::get_extension("image/webp"), "webp");
        assert_eq!(PictureValidator::get_extension("application/octet-stream"), "bin");
    }
}
