//! 튜터 응답 DTO
//!
//! 일반 응답([`TutorResponse`])에는 비밀번호 해시가 없습니다.
//! 회원가입 응답([`RegisteredTutorResponse`])만 기존 클라이언트 호환을 위해
//! 해시된 비밀번호를 함께 내려줍니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::colleges::CollegeResponse;
use crate::domain::dto::format_timestamp;
use crate::domain::entities::colleges::College;
use crate::domain::entities::tutors::Tutor;

/// 대학 참조: 저장된 ID 또는 채워진 대학 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollegeRef {
    Populated(CollegeResponse),
    Id(String),
}

impl From<ObjectId> for CollegeRef {
    fn from(id: ObjectId) -> Self {
        CollegeRef::Id(id.to_hex())
    }
}

impl From<College> for CollegeRef {
    fn from(college: College) -> Self {
        CollegeRef::Populated(college.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub college: Option<CollegeRef>,
    pub languages: Vec<String>,
    pub courses: Vec<String>,
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl<C: Into<CollegeRef>> From<Tutor<C>> for TutorResponse {
    fn from(tutor: Tutor<C>) -> Self {
        Self {
            id: tutor.id_string().unwrap_or_default(),
            first_name: tutor.first_name,
            last_name: tutor.last_name,
            email: tutor.email,
            phone_number: tutor.phone_number,
            college: tutor.college.map(Into::into),
            languages: tutor.languages,
            courses: tutor.courses,
            profile_picture: tutor.profile_picture,
            created_at: tutor.created_at.and_then(format_timestamp),
            updated_at: tutor.updated_at.and_then(format_timestamp),
        }
    }
}

/// 회원가입 응답용 튜터 정보 (해시된 비밀번호 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredTutorResponse {
    #[serde(flatten)]
    pub tutor: TutorResponse,
    pub password: String,
}

impl From<Tutor> for RegisteredTutorResponse {
    fn from(tutor: Tutor) -> Self {
        let password = tutor.password.as_str().to_string();

        Self {
            tutor: tutor.into(),
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::tutors::{HashedPassword, NewTutor};

    fn tutor(college: Option<ObjectId>) -> Tutor {
        let mut tutor = Tutor::new(NewTutor {
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone_number: "555".to_string(),
            password: HashedPassword::from_plaintext("pw", 4).unwrap(),
            college,
            languages: vec![],
            courses: vec!["Physics".to_string()],
            profile_picture: None,
        });
        tutor.id = Some(ObjectId::new());
        tutor
    }

    #[test]
    fn test_response_never_contains_password() {
        let json = serde_json::to_value(TutorResponse::from(tutor(None))).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Ana");
        assert!(json["college"].is_null());
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
    }

    #[test]
    fn test_college_reference_serializes_as_hex() {
        let college_id = ObjectId::new();

        let json = serde_json::to_value(TutorResponse::from(tutor(Some(college_id)))).unwrap();

        assert_eq!(json["college"], college_id.to_hex());
    }

    #[test]
    fn test_populated_college_serializes_as_object() {
        let college = College {
            id: Some(ObjectId::new()),
            college_name: "State U".to_string(),
            location: "Springfield".to_string(),
            email: None,
            phone_number: None,
            description: None,
            picture: None,
        };
        let stored = tutor(None);
        let populated = Tutor {
            id: stored.id,
            first_name: stored.first_name,
            last_name: stored.last_name,
            email: stored.email,
            phone_number: stored.phone_number,
            password: stored.password,
            college: Some(college),
            languages: stored.languages,
            courses: stored.courses,
            profile_picture: stored.profile_picture,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        };

        let json = serde_json::to_value(TutorResponse::from(populated)).unwrap();

        assert_eq!(json["college"]["collegeName"], "State U");
    }

    #[test]
    fn test_registration_response_includes_hash() {
        let stored = tutor(None);
        let hash = stored.password.as_str().to_string();

        let json = serde_json::to_value(RegisteredTutorResponse::from(stored)).unwrap();

        assert_eq!(json["password"], hash);
        assert_ne!(json["password"], "pw");
        assert_eq!(json["email"], "ana@example.com");
    }
}
