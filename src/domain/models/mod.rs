//! # Domain Models
//!
//! 저장되지 않는 도메인 모델입니다.
//!
//! - [`auth`]: 인증된 호출자와 역할 요구사항
//! - [`token`]: JWT 클레임
//! - [`search`]: 튜터 검색 필터
//! - [`upload`]: 프로필 사진 업로드 검증

pub mod auth;
pub mod token;
pub mod search;
pub mod upload;

pub use auth::*;
pub use token::*;
pub use search::*;
pub use upload::*;
