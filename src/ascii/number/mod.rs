pub mod f64;
pub mod i64;
pub mod u64;

pub use f64::f64;
pub use i64::i64;
pub use u64::u64;
