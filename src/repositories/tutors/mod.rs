//! 튜터 데이터 액세스
//!
//! [`TutorRepository`](tutor_repo::TutorRepository)는 `tutors` 컬렉션의 CRUD와
//! 대학 정보를 채운 목록 조회(`$lookup`)를 제공합니다.
//!
//! ```rust,ignore
//! let repo = TutorRepository::instance();
//! let tutor = repo.find_by_email("ana@example.com").await?;
//! ```

pub mod tutor_repo;

pub use tutor_repo::TutorRepository;
