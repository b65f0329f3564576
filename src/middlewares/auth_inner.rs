use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::config::SessionCookieConfig;
use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate(&req, &TokenService::instance()) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패 {}: {}", req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            if let Some(ref required) = required_role {
                if !required.is_satisfied(&user.roles) {
                    log::warn!(
                        "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                        user.user_id, user.roles, required
                    );
                    let err = AppError::AuthorizationError("Access denied".to_string());
                    return Ok(reject(req, err));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// 헤더 또는 쿠키에서 토큰을 찾아 검증합니다.
fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let token = match req.headers().get("Authorization").and_then(|h| h.to_str().ok()) {
        Some(header) => token_service.extract_bearer_token(header)?.to_string(),
        None => req
            .cookie(SessionCookieConfig::NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Authentication required".to_string()))?,
    };

    let claims = token_service.verify_token(&token)?;

    Ok(AuthenticatedUser::from(claims))
}
