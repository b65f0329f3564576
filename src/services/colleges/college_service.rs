use std::sync::Arc;
use singleton_macro::service;

use crate::{
    core::errors::AppError,
    domain::dto::colleges::CollegeResponse,
    repositories::colleges::CollegeRepository,
};

#[service(name = "college")]
pub struct CollegeService {
    college_repo: Arc<CollegeRepository>,
}

impl CollegeService {
    /// 등록된 모든 대학 (회원가입과 검색에 쓰이는 ID 조회용)
    pub async fn list_colleges(&self) -> Result<Vec<CollegeResponse>, AppError> {
        let colleges = self.college_repo.find_all().await?;

        Ok(colleges.into_iter().map(CollegeResponse::from).collect())
    }
}
