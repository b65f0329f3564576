use serde::{Deserialize, Serialize};

use crate::domain::dto::format_timestamp;
use crate::domain::entities::bookings::{PopulatedBooking, StudentSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl From<StudentSummary> for StudentResponse {
    fn from(student: StudentSummary) -> Self {
        Self {
            id: student.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone_number: student.phone_number,
            college: student.college.map(|id| id.to_hex()),
            profile_picture: student.profile_picture,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub tutor: String,
    pub student: Option<StudentResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<PopulatedBooking> for BookingResponse {
    fn from(booking: PopulatedBooking) -> Self {
        Self {
            id: booking.id.map(|id| id.to_hex()).unwrap_or_default(),
            tutor: booking.tutor.to_hex(),
            student: booking.student.map(Into::into),
            course: booking.course,
            date: booking.date.and_then(format_timestamp),
            status: booking.status,
            created_at: booking.created_at.and_then(format_timestamp),
        }
    }
}
