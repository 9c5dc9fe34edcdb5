pub mod pool;
pub mod timestamp;
