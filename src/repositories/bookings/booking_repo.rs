use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use singleton_macro::repository;

use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::bookings::{Booking, PopulatedBooking},
};

/// 학생 정보가 저장된 컬렉션
const STUDENTS_COLLECTION: &str = "students";

#[repository(name = "booking", collection = "bookings")]
pub struct BookingRepository {
    db: Arc<Database>,
}

impl BookingRepository {
    /// 튜터의 모든 예약을 학생 정보와 함께 조회합니다.
    ///
    /// 학생의 `password` 필드는 조회 단계에서 제거됩니다.
    pub async fn find_by_tutor(&self, tutor_id: &ObjectId) -> Result<Vec<PopulatedBooking>, AppError> {
        let pipeline = Self::populated_pipeline(*tutor_id);

        let documents: Vec<Document> = self.collection::<Booking>()
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Self::decode_populated).collect()
    }

    fn decode_populated(document: Document) -> Result<PopulatedBooking, AppError> {
        bson::from_document::<PopulatedBooking>(document)
            .map_err(|e| AppError::DatabaseError(format!("예약 문서 변환 실패: {}", e)))
    }

    fn populated_pipeline(tutor_id: ObjectId) -> Vec<Document> {
        vec![
            doc! { "$match": { "tutor": tutor_id } },
            doc! {
                "$lookup": {
                    "from": STUDENTS_COLLECTION,
                    "localField": "student",
                    "foreignField": "_id",
                    "as": "student",
                }
            },
            doc! { "$unwind": { "path": "$student", "preserveNullAndEmptyArrays": true } },
            doc! { "$project": { "student.password": 0 } },
        ]
    }
}
