pub mod admin;
pub mod compute;
pub mod feed;
pub mod read;
pub mod register_pool;
pub mod upsert_source;

pub use admin::*;
pub use compute::*;
pub use feed::*;
pub use read::*;
pub use register_pool::*;
pub use upsert_source::*;
