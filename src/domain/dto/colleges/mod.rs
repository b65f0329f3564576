pub mod college_response;

pub use college_response::CollegeResponse;
