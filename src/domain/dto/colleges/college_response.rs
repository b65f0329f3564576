use serde::{Deserialize, Serialize};

use crate::domain::entities::colleges::College;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeResponse {
    pub id: String,
    pub college_name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl From<College> for CollegeResponse {
    fn from(college: College) -> Self {
        Self {
            id: college.id_string().unwrap_or_default(),
            college_name: college.college_name,
            location: college.location,
            email: college.email,
            phone_number: college.phone_number,
            description: college.description,
            picture: college.picture,
        }
    }
}
