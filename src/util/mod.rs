pub mod color;
pub mod unicode;
