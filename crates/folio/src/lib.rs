pub mod macros;

pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod geometry;
pub mod paint;
pub mod radar;
pub mod scene;
pub mod schedule;
