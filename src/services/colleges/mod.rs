pub mod college_service;

pub use college_service::CollegeService;
