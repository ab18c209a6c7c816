pub mod config;
pub mod fair_price;
pub mod pool_vaults;
pub mod price_feed;
pub mod price_source;

pub use config::*;
pub use fair_price::*;
pub use pool_vaults::*;
pub use price_feed::*;
pub use price_source::*;
