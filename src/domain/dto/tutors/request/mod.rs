pub mod register_request;
pub mod login_request;
pub mod edit_profile_request;
pub mod search_query;

pub use register_request::RegisterTutorRequest;
pub use login_request::LoginRequest;
pub use edit_profile_request::{EditProfileForm, EditProfileRequest};
pub use search_query::TutorSearchQuery;
