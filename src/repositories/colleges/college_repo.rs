use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use singleton_macro::repository;

use crate::{core::errors::AppError, db::Database, domain::entities::colleges::College};

/// `colleges` 컬렉션 (읽기 전용)
#[repository(name = "college", collection = "colleges")]
pub struct CollegeRepository {
    db: Arc<Database>,
}

impl CollegeRepository {
    pub async fn find_all(&self) -> Result<Vec<College>, AppError> {
        let colleges = self.collection::<College>()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(colleges)
    }
}
