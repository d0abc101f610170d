pub mod app;
pub mod contact;
pub mod painter;
pub mod projects;
pub mod radar;
pub mod reveal;
pub mod scene;
pub mod showcase;
pub mod testimonials;
pub mod theme;
