//! 프로필 사진 저장
//!
//! multipart 요청으로 받은 임시 파일을 검증한 뒤 `UPLOAD_DIR/tutors/` 아래로 옮기고,
//! 저장 경로 문자열을 튜터 문서의 `profilePicture`에 기록할 수 있게 반환합니다.

use std::path::{Path, PathBuf};
use actix_multipart::form::tempfile::TempFile;
use actix_web::web;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;

use crate::{
    config::UploadConfig,
    core::errors::{AppError, ErrorContext},
    domain::models::upload::{FileMetadata, PictureValidator},
};

#[service(name = "upload")]
pub struct UploadService {}

impl UploadService {
    /// 업로드된 프로필 사진을 저장하고 경로를 반환합니다.
    ///
    /// 파일 선택 없이 전송된 빈 파트는 업로드가 없는 것으로 보고 `None`을 반환합니다.
    pub async fn store_profile_picture(
        &self,
        tutor_id: &ObjectId,
        file: TempFile,
    ) -> Result<Option<String>, AppError> {
        if file.size == 0 {
            return Ok(None);
        }

        let metadata = FileMetadata {
            mime_type: file
                .content_type
                .as_ref()
                .map(|mime| mime.essence_str().to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            size_bytes: file.size,
            filename: file.file_name.clone().unwrap_or_default(),
        };

        PictureValidator::validate(&metadata)?;

        let target = Self::storage_path(
            &UploadConfig::dir(),
            tutor_id,
            &metadata.mime_type,
            chrono::Utc::now().timestamp_millis(),
        );

        log::debug!("프로필 사진 저장: {} -> {}", metadata.filename, target.display());

        let destination = target.clone();
        web::block(move || persist(file, &destination))
            .await
            .context("업로드 작업 실행 실패")?
            .context("프로필 사진 저장 실패")?;

        Ok(Some(target.to_string_lossy().into_owned()))
    }

    /// 저장에 실패한 후속 처리에서 업로드 파일을 정리합니다.
    pub async fn remove(&self, stored_path: String) {
        let result = web::block(move || std::fs::remove_file(stored_path)).await;

        if let Ok(Err(e)) = result {
            log::warn!("업로드 파일 삭제 실패: {}", e);
        }
    }

    /// `{dir}/tutors/{tutor_id}-{millis}.{ext}`
    fn storage_path(dir: &Path, tutor_id: &ObjectId, mime_type: &str, millis: i64) -> PathBuf {
        let ext = PictureValidator::get_extension(mime_type);

        dir.join("tutors")
            .join(format!("{}-{}.{}", tutor_id.to_hex(), millis, ext))
    }
}

fn persist(file: TempFile, target: &Path) -> std::io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // 임시 디렉토리가 다른 파일 시스템이면 rename이 실패하므로 복사로 대체
    match file.file.persist(target) {
        Ok(_) => Ok(()),
        Err(e) => std::fs::copy(e.file.path(), target).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_path_layout() {
        let tutor_id = ObjectId::new();

        let path = UploadService::storage_path(Path::new("uploads"), &tutor_id, "image/jpeg", 1700000000000);

        assert_eq!(
            path,
            PathBuf::from(format!("uploads/tutors/{}-1700000000000.jpg", tutor_id.to_hex()))
        );
    }

    #[test]
    fn test_storage_path_uses_configured_dir() {
        let tutor_id = ObjectId::new();

        let path = UploadService::storage_path(Path::new("/srv/media"), &tutor_id, "image/webp", 1);

        assert!(path.starts_with("/srv/media/tutors"));
        assert_eq!(path.extension().unwrap(), "webp");
    }
}
