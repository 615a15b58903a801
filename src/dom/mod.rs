pub mod attrs;
pub mod document;
pub mod geometry;
