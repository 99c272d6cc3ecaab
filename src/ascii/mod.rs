pub mod boolean;
pub mod number;
pub mod whitespace;

pub use boolean::boolean;
pub use number::{f64, i64, u64};
pub use whitespace::whitespace;
