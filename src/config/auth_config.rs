//! 인증 관련 설정
//!
//! JWT 서명 키, 만료 시간, 세션 쿠키 이름을 관리합니다.

use std::env;

/// JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 키 (`JWT_SECRET`)
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// 액세스 토큰 유효 시간 (`JWT_EXPIRATION_HOURS`, 기본 24시간)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|hours| hours.parse().ok())
            .unwrap_or(24)
    }
}

/// 브라우저 세션 쿠키 설정
pub struct SessionCookieConfig;

impl SessionCookieConfig {
    /// 토큰을 담는 쿠키 이름. 로그아웃 시 이 쿠키를 제거합니다.
    pub const NAME: &'static str = "token";
}

/// 튜터 계정에 부여되는 역할
pub const TUTOR_ROLE: &str = "tutor";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_is_never_empty() {
        assert!(!JwtConfig::secret().is_empty());
    }
}
