//! # Domain Layer Module
//!
//! ```text
//! Domain Layer
//! ├── entities  - MongoDB 문서 (Tutor, College, Booking, StudentSummary)
//! ├── dto       - 요청/응답 형태
//! └── models    - 인증 정보, 토큰 클레임, 검색 필터
//! ```
//!
//! 서비스 계층은 엔티티와 모델로 동작하고, 핸들러는 DTO로만 입출력합니다.

pub mod entities;
pub mod dto;
pub mod models;
