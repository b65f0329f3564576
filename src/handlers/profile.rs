//! 로그인한 튜터 본인 리소스 핸들러 (`/api/v1/tutors/me`)
//!
//! 모든 경로는 `tutor` 역할을 요구하는 [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 뒤에 있습니다.

use actix_multipart::form::MultipartForm;
use actix_web::{delete, get, put, web, Either, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::{
        dto::tutors::request::{EditProfileForm, EditProfileRequest},
        models::auth::AuthenticatedUser,
    },
    services::tutors::TutorService,
};

/// `GET /api/v1/tutors/me`
#[get("")]
pub async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let tutor = TutorService::instance().get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "tutor": tutor })))
}

/// `PUT /api/v1/tutors/me`
///
/// JSON 또는 `multipart/form-data` 본문을 받습니다.
#[put("")]
pub async fn edit_profile(
    user: AuthenticatedUser,
    body: Either<web::Json<EditProfileRequest>, MultipartForm<EditProfileForm>>,
) -> Result<HttpResponse, AppError> {
    let (request, upload) = match body {
        Either::Left(json) => (json.into_inner(), None),
        Either::Right(form) => form.into_inner().into_parts(),
    };

    request.validate()?;

    let tutor = TutorService::instance()
        .edit_profile(&user.user_id, request, upload)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Tutor profile updated successfully",
        "tutor": tutor
    })))
}

/// `DELETE /api/v1/tutors/me`
#[delete("")]
pub async fn delete_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    TutorService::instance().delete_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Tutor profile deleted successfully" })))
}

/// `GET /api/v1/tutors/me/bookings`
#[get("/bookings")]
pub async fn get_bookings(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let bookings = TutorService::instance().get_bookings(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "bookings": bookings })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_profile_requires_authenticated_user() {
        let app = test::init_service(App::new().service(web::scope("/me").service(get_profile))).await;

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Authentication required" }));
    }
}
