pub mod fixed;
pub mod u256;

pub use fixed::*;
pub use u256::U256;
