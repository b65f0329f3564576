//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! 모든 설정은 정적 메서드로 노출되며 값이 없으면 개발용 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 서버, 업로드, 비밀번호 해싱
//! - [`auth_config`] - JWT, 세션 쿠키, 역할
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="tutor_platform"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 업로드
//! export UPLOAD_DIR="uploads"
//!
//! # 환경
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
