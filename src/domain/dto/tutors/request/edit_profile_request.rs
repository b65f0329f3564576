//! 프로필 수정 요청
//!
//! JSON 본문과 `multipart/form-data` 본문을 모두 받습니다.
//! 두 형식 모두 [`EditProfileRequest`]로 모이며, 제공된 필드만 갱신됩니다.
//! `collegeName`은 받더라도 반영하지 않습니다.

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use mongodb::bson::{doc, DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[validate(email(message = "A valid email address is required"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub languages: Option<Vec<String>>,

    #[serde(default)]
    pub courses: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile_picture: Option<String>,
}

impl EditProfileRequest {
    /// 업로드된 파일의 저장 경로로 사진 필드를 덮어씁니다.
    pub fn with_uploaded_picture(mut self, stored_path: Option<String>) -> Self {
        if stored_path.is_some() {
            self.profile_picture = stored_path;
        }
        self
    }

    /// 제공된 필드와 `updatedAt`만 담은 `$set` 문서를 만듭니다.
    pub fn to_set_document(&self, now: DateTime) -> Document {
        let mut set = doc! { "updatedAt": now };

        if let Some(first_name) = &self.first_name {
            set.insert("firstName", first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            set.insert("lastName", last_name.clone());
        }
        if let Some(email) = &self.email {
            set.insert("email", email.clone());
        }
        if let Some(phone_number) = &self.phone_number {
            set.insert("phoneNumber", phone_number.clone());
        }
        if let Some(languages) = &self.languages {
            set.insert("languages", languages.clone());
        }
        if let Some(courses) = &self.courses {
            set.insert("courses", courses.clone());
        }
        if let Some(profile_picture) = &self.profile_picture {
            set.insert("profilePicture", profile_picture.clone());
        }

        set
    }
}

/// `multipart/form-data` 프로필 수정 본문
///
/// `languages`, `courses`는 같은 이름의 필드를 반복해서 보냅니다.
#[derive(Debug, MultipartForm)]
pub struct EditProfileForm {
    #[multipart(rename = "firstName")]
    pub first_name: Option<Text<String>>,

    #[multipart(rename = "lastName")]
    pub last_name: Option<Text<String>>,

    pub email: Option<Text<String>>,

    #[multipart(rename = "phoneNumber")]
    pub phone_number: Option<Text<String>>,

    pub languages: Vec<Text<String>>,

    pub courses: Vec<Text<String>>,

    #[multipart(rename = "profilePicture")]
    pub profile_picture: Option<TempFile>,
}

impl EditProfileForm {
    /// 텍스트 필드와 업로드 파일을 분리합니다.
    pub fn into_parts(self) -> (EditProfileRequest, Option<TempFile>) {
        let texts = |values: Vec<Text<String>>| -> Option<Vec<String>> {
            if values.is_empty() {
                None
            } else {
                Some(values.into_iter().map(Text::into_inner).collect())
            }
        };

        let request = EditProfileRequest {
            first_name: self.first_name.map(Text::into_inner),
            last_name: self.last_name.map(Text::into_inner),
            email: self.email.map(Text::into_inner),
            phone_number: self.phone_number.map(Text::into_inner),
            languages: texts(self.languages),
            courses: texts(self.courses),
            profile_picture: None,
        };

        (request, self.profile_picture)
    }
}
