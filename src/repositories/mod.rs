//! 데이터 액세스 계층
//!
//! `#[repository]` 매크로로 싱글톤 관리되는 리포지토리들입니다.
//! 모두 `Database` 하나를 공유하며, 대학 정보와 학생 정보 채우기는
//! `$lookup` 집계로 처리합니다.
//!
//! ```rust,ignore
//! use crate::repositories::tutors::TutorRepository;
//!
//! let tutor_repo = TutorRepository::instance();
//! let tutors = tutor_repo.find_populated(doc! {}).await?;
//! ```

pub mod tutors;
pub mod colleges;
pub mod bookings;
