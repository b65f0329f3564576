pub mod college_repo;

pub use college_repo::CollegeRepository;
