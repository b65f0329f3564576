//! 로그인 / 로그아웃 핸들러

use actix_web::{cookie::Cookie, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    config::SessionCookieConfig,
    core::errors::AppError,
    domain::dto::tutors::request::LoginRequest,
    services::tutors::TutorService,
};

/// `POST /api/v1/tutors/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = TutorService::instance().login(&payload).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "token": token
    })))
}

/// `POST /api/v1/tutors/logout`
///
/// 토큰은 무상태이므로 서버에서 무효화하지 않고 `token` 쿠키만 제거합니다.
#[post("/logout")]
pub async fn logout() -> Result<HttpResponse, AppError> {
    let mut cookie = Cookie::new(SessionCookieConfig::NAME, "");
    cookie.set_path("/");
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "message": "Logout successful" })))
}
