pub mod tutor;
pub mod hashed_password;

pub use tutor::{NewTutor, PopulatedTutor, Tutor};
pub use hashed_password::HashedPassword;
