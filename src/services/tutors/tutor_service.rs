//! 튜터 비즈니스 로직
//!
//! 회원가입, 로그인, 프로필 조회/수정/삭제, 목록/검색, 예약 조회를 담당합니다.
//! 각 작업은 저장소 호출 한 번(또는 조회 후 갱신)으로 끝나며 별도 캐시는 없습니다.

use std::sync::Arc;
use std::time::Instant;
use actix_multipart::form::tempfile::TempFile;
use mongodb::bson::{oid::ObjectId, DateTime};
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    core::errors::AppError,
    domain::{
        dto::tutors::{
            request::{EditProfileRequest, LoginRequest, RegisterTutorRequest},
            response::{BookingResponse, RegisteredTutorResponse, TutorResponse},
        },
        entities::tutors::{HashedPassword, NewTutor, Tutor},
        models::search::TutorSearchFilter,
    },
    repositories::{bookings::BookingRepository, tutors::TutorRepository},
    services::{auth::TokenService, uploads::UploadService},
};

/// 이메일 미존재와 비밀번호 불일치에 공통으로 사용하는 메시지
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[service(name = "tutor")]
pub struct TutorService {
    tutor_repo: Arc<TutorRepository>,
    booking_repo: Arc<BookingRepository>,
    token_service: Arc<TokenService>,
    upload_service: Arc<UploadService>,
}

impl TutorService {
    /// 새 튜터를 등록합니다.
    ///
    /// 비밀번호는 엔티티 생성 전에 항상 해싱되며,
    /// 형식이 잘못된 `collegeId`는 오류 없이 참조 없음으로 저장됩니다.
    pub async fn register(&self, request: RegisterTutorRequest) -> Result<RegisteredTutorResponse, AppError> {
        let start_time = Instant::now();

        let hash_start = Instant::now();
        let password = HashedPassword::from_plaintext(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let tutor = build_tutor(request, password);

        let created = self.tutor_repo.create(tutor).await?;

        log::info!(
            "튜터 등록 완료: {} ({:?})",
            created.email,
            start_time.elapsed()
        );

        Ok(RegisteredTutorResponse::from(created))
    }

    /// 이메일과 비밀번호가 모두 일치하는 튜터를 찾습니다.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Tutor>, AppError> {
        let tutor = self.tutor_repo.find_by_email(email).await?;

        Ok(tutor.filter(|tutor| tutor.password.verify(password)))
    }

    /// 자격 증명을 확인하고 액세스 토큰을 발급합니다.
    ///
    /// 조회 단계의 검증과 별개로 저장된 해시와 한 번 더 비교합니다.
    /// 두 실패 경우 모두 같은 401 응답을 돌려줍니다.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AppError> {
        let found = self
            .find_by_credentials(&request.email, &request.password)
            .await?;
        let tutor = check_credentials(found, &request.password)?;

        let token = self.token_service.generate_auth_token(&tutor)?;

        log::info!("튜터 로그인: {}", tutor.email);

        Ok(token)
    }

    pub async fn get_profile(&self, tutor_id: &str) -> Result<TutorResponse, AppError> {
        let not_found = || AppError::NotFound("Profile not found".to_string());
        let id = parse_tutor_id(tutor_id).ok_or_else(not_found)?;

        let tutor = self.tutor_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)?;

        Ok(TutorResponse::from(tutor))
    }

    /// 제공된 필드만 갱신하고 갱신된 프로필을 반환합니다.
    ///
    /// 업로드 파일이 있으면 저장한 뒤 그 경로가 `profilePicture` 값이 됩니다.
    pub async fn edit_profile(
        &self,
        tutor_id: &str,
        request: EditProfileRequest,
        upload: Option<TempFile>,
    ) -> Result<TutorResponse, AppError> {
        let id = parse_tutor_id(tutor_id).ok_or_else(tutor_not_found)?;

        let stored_path = match upload {
            Some(file) => self.upload_service.store_profile_picture(&id, file).await?,
            None => None,
        };

        let request = request.with_uploaded_picture(stored_path.clone());
        let set = request.to_set_document(DateTime::now());

        match self.tutor_repo.update(&id, set).await {
            Ok(Some(updated)) => {
                log::info!("튜터 프로필 수정: {}", tutor_id);
                Ok(TutorResponse::from(updated))
            }
            Ok(None) => {
                self.discard_upload(stored_path).await;
                Err(tutor_not_found())
            }
            Err(e) => {
                self.discard_upload(stored_path).await;
                Err(e)
            }
        }
    }

    /// 튜터를 삭제합니다. 예약은 함께 삭제하지 않습니다.
    pub async fn delete_profile(&self, tutor_id: &str) -> Result<(), AppError> {
        let id = parse_tutor_id(tutor_id).ok_or_else(tutor_not_found)?;

        ensure_deleted(self.tutor_repo.delete(&id).await?)?;

        log::info!("튜터 삭제: {}", tutor_id);
        Ok(())
    }

    /// 전체 튜터 목록 (대학 정보 포함, 저장 순서)
    pub async fn list_tutors(&self) -> Result<Vec<TutorResponse>, AppError> {
        self.search_tutors(&TutorSearchFilter::All).await
    }

    pub async fn search_tutors(&self, filter: &TutorSearchFilter) -> Result<Vec<TutorResponse>, AppError> {
        let start_time = Instant::now();

        let tutors = self.tutor_repo.find_populated(filter.to_document()).await?;

        log::debug!(
            "튜터 검색 {:?}: {}건 ({:?})",
            filter,
            tutors.len(),
            start_time.elapsed()
        );

        Ok(tutors.into_iter().map(TutorResponse::from).collect())
    }

    /// 튜터의 예약 목록 (학생 정보 포함)
    pub async fn get_bookings(&self, tutor_id: &str) -> Result<Vec<BookingResponse>, AppError> {
        let Some(id) = parse_tutor_id(tutor_id) else {
            return Ok(Vec::new());
        };

        let bookings = self.booking_repo.find_by_tutor(&id).await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    async fn discard_upload(&self, stored_path: Option<String>) {
        if let Some(path) = stored_path {
            self.upload_service.remove(path).await;
        }
    }
}

fn parse_tutor_id(tutor_id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(tutor_id).ok()
}

fn tutor_not_found() -> AppError {
    AppError::NotFound("Tutor not found".to_string())
}

/// 형식이 잘못된 `collegeId`는 오류 없이 참조 없음으로 저장됩니다.
fn build_tutor(request: RegisterTutorRequest, password: HashedPassword) -> Tutor {
    let college = request.college_ref();
    if college.is_none() && request.college_id.is_some() {
        log::debug!("유효하지 않은 collegeId 무시: {:?}", request.college_id);
    }

    Tutor::new(NewTutor {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone_number: request.phone_number,
        password,
        college,
        languages: request.languages,
        courses: request.courses,
        profile_picture: request.profile_picture,
    })
}

/// 조회 결과가 없거나 저장된 해시와 다르면 같은 401을 반환합니다.
fn check_credentials(found: Option<Tutor>, password: &str) -> Result<Tutor, AppError> {
    let invalid = || AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string());

    let tutor = found.ok_or_else(invalid)?;
    if !tutor.password.verify(password) {
        return Err(invalid());
    }

    Ok(tutor)
}

fn ensure_deleted(deleted: bool) -> Result<(), AppError> {
    if deleted {
        Ok(())
    } else {
        Err(tutor_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
    use serde_json::{json, Value};

    fn tutor_with_password(plain: &str) -> Tutor {
        let password = HashedPassword::from_plaintext(plain, 4).unwrap();
        let request: RegisterTutorRequest =
            serde_json::from_value(json!({ "email": "ana@example.com", "password": plain })).unwrap();

        build_tutor(request, password)
    }

    async fn error_body(error: AppError) -> (StatusCode, Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_unknown_email_and_wrong_password_share_one_response() {
        let unknown = check_credentials(None, "secret").unwrap_err();
        let wrong = check_credentials(Some(tutor_with_password("secret")), "guess").unwrap_err();

        let expected = json!({ "message": "Invalid email or password" });
        assert_eq!(error_body(unknown).await, (StatusCode::UNAUTHORIZED, expected.clone()));
        assert_eq!(error_body(wrong).await, (StatusCode::UNAUTHORIZED, expected));
    }

    #[test]
    fn test_matching_password_passes_check() {
        let tutor = check_credentials(Some(tutor_with_password("secret")), "secret").unwrap();

        assert_eq!(tutor.email, "ana@example.com");
    }

    #[actix_web::test]
    async fn test_deleting_missing_tutor_is_not_found() {
        assert!(ensure_deleted(true).is_ok());

        let (status, body) = error_body(ensure_deleted(false).unwrap_err()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Tutor not found" }));
    }

    #[test]
    fn test_invalid_college_id_registers_with_null_college() {
        let request: RegisterTutorRequest = serde_json::from_value(json!({
            "email": "ana@example.com",
            "password": "secret",
            "collegeId": "not-an-object-id",
        }))
        .unwrap();
        let password = HashedPassword::from_plaintext("secret", 4).unwrap();

        let mut tutor = build_tutor(request, password);
        tutor.id = Some(ObjectId::new());
        let body = serde_json::to_value(RegisteredTutorResponse::from(tutor)).unwrap();

        assert_eq!(body["college"], Value::Null);
        assert_eq!(body["email"], "ana@example.com");
    }

    #[test]
    fn test_valid_college_id_is_stored_as_reference() {
        let college = ObjectId::new();
        let request: RegisterTutorRequest = serde_json::from_value(json!({
            "email": "ana@example.com",
            "password": "secret",
            "collegeId": college.to_hex(),
        }))
        .unwrap();

        let tutor = build_tutor(request, HashedPassword::from_plaintext("secret", 4).unwrap());

        assert_eq!(tutor.college, Some(college));
    }

    #[test]
    fn test_parse_tutor_id() {
        let id = ObjectId::new();

        assert_eq!(parse_tutor_id(&id.to_hex()), Some(id));
        assert_eq!(parse_tutor_id("not-an-id"), None);
        assert_eq!(parse_tutor_id(""), None);
    }
}
