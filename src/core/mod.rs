//! # Core Framework Module
//!
//! 튜터 서비스 전반에서 공유하는 핵심 기능입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입 기반 싱글톤 조회 및 등록
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - `#[service]` / `#[repository]` 매크로가 생성한 코드가 이 모듈을 참조합니다
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현, `{ "message": ... }` 응답
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::{repository, service};
//!
//! #[repository(name = "tutor", collection = "tutors")]
//! pub struct TutorRepository {
//!     db: Arc<Database>,
//! }
//!
//! #[service(name = "tutor")]
//! pub struct TutorService {
//!     tutor_repo: Arc<TutorRepository>, // 자동 주입
//! }
//!
//! // main.rs
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let tutor_service = TutorService::instance();
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
