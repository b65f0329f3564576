use actix_web::{get, HttpResponse};

use crate::{core::errors::AppError, services::colleges::CollegeService};

/// `GET /api/v1/colleges`
#[get("")]
pub async fn get_colleges() -> Result<HttpResponse, AppError> {
    let colleges = CollegeService::instance().list_colleges().await?;

    Ok(HttpResponse::Ok().json(colleges))
}
