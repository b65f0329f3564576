use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 튜터 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTutorRequest {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default)]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub college_id: Option<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub courses: Vec<String>,

    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl RegisterTutorRequest {
    /// 유효한 ObjectId 형식일 때만 대학 참조로 사용합니다.
    /// 그 외의 값은 오류 없이 참조 없음으로 처리됩니다.
    pub fn college_ref(&self) -> Option<ObjectId> {
        self.college_id
            .as_deref()
            .and_then(|id| ObjectId::parse_str(id).ok())
    }
}
