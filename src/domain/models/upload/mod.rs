pub mod picture_validator;

pub use picture_validator::{FileMetadata, PictureValidator};
