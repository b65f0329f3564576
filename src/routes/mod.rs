//! API 라우트 설정
//!
//! | 경로 | 인증 |
//! |------|------|
//! | `POST /api/v1/tutors/register`, `/login`, `/logout` | 불필요 |
//! | `GET /api/v1/tutors`, `/api/v1/tutors/search` | 불필요 |
//! | `GET/PUT/DELETE /api/v1/tutors/me`, `GET /api/v1/tutors/me/bookings` | `tutor` 역할 |
//! | `GET /api/v1/colleges` | 불필요 |
//! | `GET /health` | 불필요 |
//!
//! `/api/v1/tutors/me` scope는 `/api/v1/tutors`보다 먼저 등록되어야 합니다.
//! actix-web은 등록 순서대로 scope 접두사를 매칭합니다.

use actix_multipart::form::tempfile::TempFileConfig;
use actix_web::{error::JsonPayloadError, web, HttpRequest};
use serde_json::json;

use crate::config::{UploadConfig, TUTOR_ROLE};
use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(health_check);

    configure_profile_routes(cfg);
    configure_tutor_routes(cfg);
    configure_college_routes(cfg);
}

fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    // JSON/multipart 분기 시 본문 전체가 버퍼링되므로 업로드 한도보다 크게 잡는다
    let payload_limit = UploadConfig::MAX_PICTURE_BYTES * 2;

    cfg.service(
        web::scope("/api/v1/tutors/me")
            .wrap(AuthMiddleware::required_with_role(TUTOR_ROLE))
            .app_data(web::PayloadConfig::new(payload_limit))
            .app_data(TempFileConfig::default().directory(UploadConfig::dir()))
            .service(handlers::profile::get_profile)
            .service(handlers::profile::edit_profile)
            .service(handlers::profile::delete_profile)
            .service(handlers::profile::get_bookings)
    );
}

fn configure_tutor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tutors")
            .service(handlers::tutors::register)
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::tutors::search_tutors)
            .service(handlers::tutors::get_tutors)
    );
}

fn configure_college_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/colleges")
            .service(handlers::colleges::get_colleges)
    );
}

/// JSON 본문 파싱 실패를 `{ "message": ... }` 형태의 400 응답으로 바꿉니다.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError(err.to_string()).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "tutor_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
