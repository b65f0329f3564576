//! 비즈니스 로직 계층
//!
//! `#[service]` 매크로로 싱글톤 관리되며, `Arc<T>` 필드는
//! [`ServiceLocator`](crate::core::registry::ServiceLocator)가 주입합니다.
//!
//! - [`tutors`]: 튜터 계정, 프로필, 검색, 예약 조회
//! - [`colleges`]: 대학 목록
//! - [`auth`]: JWT 발급/검증
//! - [`uploads`]: 프로필 사진 저장

pub mod tutors;
pub mod colleges;
pub mod auth;
pub mod uploads;
