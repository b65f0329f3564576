use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    core::errors::AppError,
    domain::dto::tutors::request::{RegisterTutorRequest, TutorSearchQuery},
    services::tutors::TutorService,
};

/// `POST /api/v1/tutors/register`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterTutorRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let tutor = TutorService::instance().register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Tutor registered successfully",
        "tutor": tutor
    })))
}

/// `GET /api/v1/tutors`
#[get("")]
pub async fn get_tutors() -> Result<HttpResponse, AppError> {
    let tutors = TutorService::instance().list_tutors().await?;

    Ok(HttpResponse::Ok().json(tutors))
}

/// `GET /api/v1/tutors/search?name=..&colleges=..`
#[get("/search")]
pub async fn search_tutors(
    params: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let query = TutorSearchQuery::from_pairs(params.into_inner());

    let tutors = TutorService::instance()
        .search_tutors(&query.to_filter())
        .await?;

    Ok(HttpResponse::Ok().json(tutors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_register_rejects_malformed_email() {
        let app = test::init_service(App::new().service(register)).await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "email": "not-an-email", "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("email"));
    }
}
