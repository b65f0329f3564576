//! 인증된 호출자 정보
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰을 검증한 뒤
//! 요청 extensions에 넣어 두며, 핸들러는 추출자로 꺼내 씁니다.
//!
//! ```rust,ignore
//! #[get("")]
//! async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     let tutor = TutorService::instance().get_profile(&user.user_id).await?;
//!     Ok(HttpResponse::Ok().json(json!({ "tutor": tutor })))
//! }
//! ```

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 튜터 ObjectId (16진수 문자열)
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            roles: claims.roles,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Authentication required".to_string(),
            ))),
        }
    }
}
