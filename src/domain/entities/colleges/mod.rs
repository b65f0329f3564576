pub mod college;

pub use college::College;
