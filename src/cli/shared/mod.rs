pub mod style;
pub mod validate;
