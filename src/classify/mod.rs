pub mod category;
pub mod classifier;
