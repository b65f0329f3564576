use serde::{Deserialize, Serialize};

/// 튜터 액세스 토큰 클레임
///
/// `sub`는 튜터 `ObjectId`의 16진수 문자열이며, `jti`는 토큰마다 새로 생성되는 UUID입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}
