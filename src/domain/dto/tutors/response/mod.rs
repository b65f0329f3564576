pub mod tutor_response;
pub mod booking_response;

pub use tutor_response::{CollegeRef, RegisteredTutorResponse, TutorResponse};
pub use booking_response::{BookingResponse, StudentResponse};
