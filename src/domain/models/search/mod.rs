pub mod tutor_search_filter;

pub use tutor_search_filter::TutorSearchFilter;
