use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use singleton_macro::repository;

use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::tutors::{PopulatedTutor, Tutor},
    repositories::colleges::CollegeRepository,
};

#[repository(name = "tutor", collection = "tutors")]
pub struct TutorRepository {
    db: Arc<Database>,

    colleges: Arc<CollegeRepository>,
}

impl TutorRepository {
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Tutor>, AppError> {
        let tutor = self.collection::<Tutor>()
            .find_one(doc! { "email": email })
            .await?;

        Ok(tutor)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Tutor>, AppError> {
        let tutor = self.collection::<Tutor>()
            .find_one(doc! { "_id": *id })
            .await?;

        Ok(tutor)
    }

    /// 튜터를 저장하고 생성된 `_id`를 채워 반환합니다.
    pub async fn create(&self, mut tutor: Tutor) -> Result<Tutor, AppError> {
        let result = self.collection::<Tutor>()
            .insert_one(&tutor)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("insert_one did not return an ObjectId".to_string())
        })?;
        tutor.id = Some(id);

        Ok(tutor)
    }

    /// `$set` 문서를 적용하고 갱신된 문서를 반환합니다. 대상이 없으면 `None`입니다.
    pub async fn update(&self, id: &ObjectId, set: Document) -> Result<Option<Tutor>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<Tutor>()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(options)
            .await?;

        Ok(updated)
    }

    /// 삭제 여부를 반환합니다.
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection::<Tutor>()
            .delete_one(doc! { "_id": *id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    /// 필터에 맞는 튜터를 저장 순서대로 조회하며 `college` 참조를 채웁니다.
    pub async fn find_populated(&self, filter: Document) -> Result<Vec<PopulatedTutor>, AppError> {
        let pipeline = vec![
            doc! { "$match": filter },
            doc! {
                "$lookup": {
                    "from": self.colleges.collection_name(),
                    "localField": "college",
                    "foreignField": "_id",
                    "as": "college",
                }
            },
            doc! { "$unwind": { "path": "$college", "preserveNullAndEmptyArrays": true } },
        ];

        let documents: Vec<Document> = self.collection::<Tutor>()
            .aggregate(pipeline)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Self::decode_populated).collect()
    }

    fn decode_populated(document: Document) -> Result<PopulatedTutor, AppError> {
        bson::from_document::<PopulatedTutor>(document)
            .map_err(|e| AppError::DatabaseError(format!("튜터 문서 변환 실패: {}", e)))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .name("email_lookup".to_string())
                .build())
            .build();

        let college_index = IndexModel::builder()
            .keys(doc! { "college": 1 })
            .options(IndexOptions::builder()
                .name("college_lookup".to_string())
                .build())
            .build();

        self.collection::<Tutor>()
            .create_indexes([email_index, college_index])
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_populated_tutor_with_college() {
        let college_id = ObjectId::new();
        let document = doc! {
            "_id": ObjectId::new(),
            "firstName": "Dana",
            "lastName": "Kim",
            "email": "dana@example.com",
            "password": "$2b$04$abcdefghijklmnopqrstuu",
            "college": { "_id": college_id, "collegeName": "State U", "location": "Springfield" },
        };

        let tutor = TutorRepository::decode_populated(document).unwrap();

        assert_eq!(tutor.college.unwrap().id, Some(college_id));
    }

    #[test]
    fn test_decode_populated_tutor_without_college() {
        let document = doc! {
            "_id": ObjectId::new(),
            "email": "ben@example.com",
            "password": "$2b$04$abcdefghijklmnopqrstuu",
        };

        let tutor = TutorRepository::decode_populated(document).unwrap();

        assert!(tutor.college.is_none());
    }

    #[test]
    fn test_decode_rejects_document_without_email() {
        let result = TutorRepository::decode_populated(doc! { "_id": ObjectId::new() });

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
