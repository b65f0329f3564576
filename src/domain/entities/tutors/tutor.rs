//! 튜터 엔티티
//!
//! `tutors` 컬렉션에 저장되는 문서입니다. `college` 필드는 저장 시에는
//! 대학의 `ObjectId` 참조이고, `$lookup`으로 조회하면 [`College`] 문서로 채워집니다.
//! 두 형태를 하나의 제네릭 타입 `Tutor<C>`로 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::hashed_password::HashedPassword;
use crate::domain::entities::colleges::College;

/// 튜터 문서
///
/// `C`는 대학 참조의 형태입니다. 저장된 문서는 `ObjectId`,
/// 대학이 채워진 조회 결과는 [`PopulatedTutor`]입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "C: Deserialize<'de>"))]
pub struct Tutor<C = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub password: HashedPassword,
    #[serde(default)]
    pub college: Option<C>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

/// 대학 정보가 채워진 튜터
pub type PopulatedTutor = Tutor<College>;

/// 신규 튜터 생성에 필요한 값
///
/// 비밀번호는 이미 해싱된 상태로만 전달됩니다.
#[derive(Debug, Clone)]
pub struct NewTutor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: HashedPassword,
    pub college: Option<ObjectId>,
    pub languages: Vec<String>,
    pub courses: Vec<String>,
    pub profile_picture: Option<String>,
}

impl Tutor {
    pub fn new(new_tutor: NewTutor) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name: new_tutor.first_name,
            last_name: new_tutor.last_name,
            email: new_tutor.email,
            phone_number: new_tutor.phone_number,
            password: new_tutor.password,
            college: new_tutor.college,
            languages: new_tutor.languages,
            courses: new_tutor.courses,
            profile_picture: new_tutor.profile_picture,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl<C> Tutor<C> {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    fn sample() -> NewTutor {
        NewTutor {
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "555-0100".to_string(),
            password: HashedPassword::from_plaintext("pw", 4).unwrap(),
            college: None,
            languages: vec!["English".to_string()],
            courses: vec![],
            profile_picture: None,
        }
    }

    #[test]
    fn test_new_tutor_sets_timestamps() {
        let tutor = Tutor::new(sample());

        assert!(tutor.id.is_none());
        assert!(tutor.created_at.is_some());
        assert_eq!(tutor.created_at, tutor.updated_at);
    }

    #[test]
    fn test_document_uses_camel_case_and_stores_hash() {
        let tutor = Tutor::new(sample());
        let hash = tutor.password.as_str().to_string();

        let document = bson::to_document(&tutor).unwrap();

        assert_eq!(document.get_str("firstName").unwrap(), "Ana");
        assert_eq!(document.get_str("phoneNumber").unwrap(), "555-0100");
        assert_eq!(document.get_str("password").unwrap(), hash);
        assert!(document.get("_id").is_none());
        assert!(document.get("profilePicture").is_none());
    }

    #[test]
    fn test_populated_tutor_without_college_field() {
        let document = doc! {
            "_id": ObjectId::new(),
            "firstName": "Ben",
            "lastName": "Ortiz",
            "email": "ben@example.com",
            "password": "$2b$04$abcdefghijklmnopqrstuu",
        };

        let tutor: PopulatedTutor = bson::from_document(document).unwrap();

        assert!(tutor.college.is_none());
        assert!(tutor.languages.is_empty());
    }

    #[test]
    fn test_populated_tutor_with_college_document() {
        let college_id = ObjectId::new();
        let document = doc! {
            "_id": ObjectId::new(),
            "firstName": "Dana",
            "lastName": "Kim",
            "email": "dana@example.com",
            "password": "$2b$04$abcdefghijklmnopqrstuu",
            "college": { "_id": college_id, "collegeName": "State U", "location": "Springfield" },
        };

        let tutor: PopulatedTutor = bson::from_document(document).unwrap();
        let college = tutor.college.unwrap();

        assert_eq!(college.id, Some(college_id));
        assert_eq!(college.college_name, "State U");
    }
}
