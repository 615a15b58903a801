pub mod assigner;
pub mod label;
