//! HTTP 핸들러
//!
//! 핸들러는 요청을 추출/검증하고 서비스 싱글톤을 호출한 뒤 JSON으로 응답합니다.
//! 실패는 모두 [`AppError`](crate::core::errors::AppError)로 반환되어 `{ "message": ... }` 형태가 됩니다.

pub mod tutors;
pub mod auth;
pub mod profile;
pub mod colleges;
