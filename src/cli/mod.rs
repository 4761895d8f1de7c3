pub mod scan;
pub mod shared;
