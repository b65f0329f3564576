//! JWT 액세스 토큰 발급 및 검증
//!
//! HS256 서명을 사용하며 서명 키와 만료 시간은 [`JwtConfig`]에서 읽습니다.
//! 토큰은 요청마다 서명으로만 검증되는 무상태 토큰입니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use uuid::Uuid;

use crate::{
    config::{JwtConfig, TUTOR_ROLE},
    core::errors::AppError,
    domain::{entities::tutors::Tutor, models::token::TokenClaims},
};

#[service(name = "token")]
pub struct TokenService {}

impl TokenService {
    /// 로그인한 튜터의 액세스 토큰을 발급합니다.
    pub fn generate_auth_token(&self, tutor: &Tutor) -> Result<String, AppError> {
        let tutor_id = tutor.id_string().ok_or_else(|| {
            AppError::InternalError("저장되지 않은 튜터에는 토큰을 발급할 수 없습니다".to_string())
        })?;

        self.issue_token(&tutor_id, &tutor.email, vec![TUTOR_ROLE.to_string()])
    }

    pub fn issue_token(&self, subject: &str, email: &str, roles: Vec<String>) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = expires_at(now, JwtConfig::expiration_hours())?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            email: email.to_string(),
            roles,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Invalid token".to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }
}

/// `now`에서 `hours`시간 뒤의 만료 시각. 범위를 벗어난 설정값은 오류로 처리합니다.
fn expires_at(now: DateTime<Utc>, hours: i64) -> Result<DateTime<Utc>, AppError> {
    Duration::try_hours(hours)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            AppError::InternalError(format!("JWT_EXPIRATION_HOURS 값이 허용 범위를 벗어났습니다: {}", hours))
        })
}
