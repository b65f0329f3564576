//! 인증 미들웨어
//!
//! 보호된 scope에 적용하여 JWT를 검증하고, 성공하면
//! [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를 요청 extensions에 넣습니다.
//!
//! 토큰은 `Authorization: Bearer <jwt>` 헤더에서 먼저 찾고, 없으면 `token` 쿠키를 사용합니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 토큰 없음 / 서명 불일치 / 만료 | 401 |
//! | 필요한 역할 없음 | 403 |
//!
//! ```rust,ignore
//! web::scope("/api/v1/tutors/me")
//!     .wrap(AuthMiddleware::required_with_role(TUTOR_ROLE))
//!     .service(get_profile)
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 유효한 토큰만 요구합니다.
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 유효한 토큰과 특정 역할을 요구합니다.
    pub fn required_with_role(role: &str) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role.to_string())),
        }
    }

    /// 나열된 역할 중 하나를 요구합니다.
    pub fn required_with_roles(roles: Vec<&str>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(
                roles.into_iter().map(str::to_string).collect(),
            )),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
