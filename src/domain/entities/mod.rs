//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들입니다.
//!
//! | 엔티티 | 컬렉션 | 소유 |
//! |--------|--------|------|
//! | [`Tutor`] | `tutors` | 이 서비스 (생성, 수정, 삭제) |
//! | [`College`] | `colleges` | 외부 관리, 참조만 |
//! | [`Booking`] | `bookings` | 외부 관리, 튜터 기준 조회만 |
//! | [`StudentSummary`] | `students` | 외부 관리, 예약 조회 시 채워짐 |
//!
//! 참조 필드(`college`, `student`)는 제네릭 파라미터로 표현되어
//! 저장 형태(`ObjectId`)와 `$lookup`으로 채워진 형태를 같은 구조체로 다룹니다.
//!
//! ```rust,ignore
//! let stored: Tutor = ...;            // college: Option<ObjectId>
//! let populated: PopulatedTutor = ...; // college: Option<College>
//! ```
//!
//! 비밀번호는 [`HashedPassword`]로만 보관되므로 평문이 저장될 수 없습니다.

pub mod tutors;
pub mod colleges;
pub mod bookings;

pub use tutors::*;
pub use colleges::*;
pub use bookings::*;
