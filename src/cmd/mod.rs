pub mod fields;
pub mod predict;
