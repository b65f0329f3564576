//! 튜터 서비스 백엔드
//!
//! 튜터 회원가입/로그인, 프로필 관리, 튜터 검색, 예약 조회, 대학 목록을
//! 제공하는 REST API 서비스입니다. 싱글톤 매크로 기반 의존성 주입 위에서
//! MongoDB를 저장소로 사용합니다.
//!
//! # Features
//!
//! - **튜터 계정**: 회원가입, bcrypt 비밀번호 해싱, JWT 로그인/로그아웃
//! - **프로필**: 조회, JSON/multipart 수정(프로필 사진 업로드), 삭제
//! - **검색**: 이름(부분 일치, 대소문자 무시)과 대학 목록 필터
//! - **예약**: 본인 예약 목록 (학생 정보 포함)
//! - **대학**: 전체 대학 목록
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use tutor_service_backend::domain::dto::tutors::request::LoginRequest;
//! use tutor_service_backend::services::tutors::TutorService;
//!
//! let tutor_service = TutorService::instance();
//! let request = LoginRequest { email: "ana@example.com".into(), password: "secret".into() };
//! let token = tutor_service.login(&request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
