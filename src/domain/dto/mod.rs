//! # Data Transfer Objects
//!
//! HTTP 요청 본문/쿼리와 응답 JSON 형태를 정의합니다.
//! 모든 필드는 camelCase로 직렬화되며, ID는 16진수 문자열 `id`로 노출됩니다.

use mongodb::bson::DateTime;

pub mod tutors;
pub mod colleges;

pub use tutors::*;
pub use colleges::*;

/// 응답용 RFC 3339 타임스탬프
pub(crate) fn format_timestamp(value: DateTime) -> Option<String> {
    value.try_to_rfc3339_string().ok()
}
