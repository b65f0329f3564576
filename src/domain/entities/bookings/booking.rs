//! 예약 엔티티
//!
//! 예약은 다른 서비스가 생성하며, 이 서비스는 튜터 기준으로 조회만 합니다.
//! 조회 시 `student` 참조는 [`StudentSummary`]로 채워집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 예약 문서 (`bookings` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct Booking<S = ObjectId> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub tutor: ObjectId,
    #[serde(default)]
    pub student: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

/// 학생 정보가 채워진 예약
pub type PopulatedBooking = Booking<StudentSummary>;

/// 예약 조회용 학생 정보 (`students` 컬렉션)
///
/// 비밀번호 필드는 조회 단계에서 제외되므로 여기에 존재하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_populated_booking_from_lookup_result() {
        let tutor_id = ObjectId::new();
        let student_id = ObjectId::new();
        let document = doc! {
            "_id": ObjectId::new(),
            "tutor": tutor_id,
            "student": {
                "_id": student_id,
                "firstName": "Sam",
                "lastName": "Lee",
                "email": "sam@example.com",
            },
            "course": "Calculus",
            "status": "confirmed",
        };

        let booking: PopulatedBooking = bson::from_document(document).unwrap();
        let student = booking.student.unwrap();

        assert_eq!(booking.tutor, tutor_id);
        assert_eq!(student.id, Some(student_id));
        assert_eq!(student.first_name, "Sam");
        assert_eq!(booking.course.as_deref(), Some("Calculus"));
    }

    #[test]
    fn test_booking_with_missing_student() {
        let document = doc! { "_id": ObjectId::new(), "tutor": ObjectId::new() };

        let booking: PopulatedBooking = bson::from_document(document).unwrap();

        assert!(booking.student.is_none());
        assert!(booking.date.is_none());
    }
}
