use anchor_lang::prelude::*;

pub mod engine;
pub mod errors;
pub mod feeds;
pub mod instructions;
pub mod math;
pub mod pricing;
pub mod registry;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod testing;

use instructions::*;

declare_id!("DyC5NNJN9y2QksAXPMpiChQocjcVbmBoB67KJgUrVwoo");

#[program]
pub mod fair_lp_oracle {
    use super::*;

    /// Create the oracle configuration (one-time setup)
    pub fn initialize(
        ctx: Context<Initialize>,
        authority: Pubkey,
        max_staleness_secs: Option<i64>,
    ) -> Result<()> {
        instructions::initialize(ctx, authority, max_staleness_secs)
    }

    /// Hand the registry authority to a new key
    pub fn set_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority(ctx, new_authority)
    }

    /// Change the reference price staleness window
    pub fn set_max_staleness(ctx: Context<UpdateConfig>, max_staleness_secs: i64) -> Result<()> {
        instructions::set_max_staleness(ctx, max_staleness_secs)
    }

    /// Register or replace the reference price source of an asset
    pub fn upsert_price_source(
        ctx: Context<UpsertPriceSource>,
        asset: Pubkey,
        source: Pubkey,
    ) -> Result<()> {
        instructions::upsert_price_source(ctx, asset, source)
    }

    /// Bind a pool's LP mint to its reserve vaults
    pub fn register_pool(ctx: Context<RegisterPool>) -> Result<()> {
        instructions::register_pool(ctx)
    }

    /// Compute a pool's fair LP token price and cache it
    pub fn compute_and_cache(ctx: Context<ComputeAndCache>) -> Result<u128> {
        instructions::compute_and_cache(ctx)
    }

    /// Return the last cached fair price of a pool
    pub fn read_cached(ctx: Context<ReadCached>) -> Result<u128> {
        instructions::read_cached(ctx)
    }

    /// Create a push price feed
    pub fn create_price_feed(
        ctx: Context<CreatePriceFeed>,
        label: String,
        decimals: u8,
    ) -> Result<()> {
        instructions::create_price_feed(ctx, label, decimals)
    }

    /// Publish a price to a push feed
    pub fn publish_price(ctx: Context<PublishPrice>, price: i64, client_ts_ms: i64) -> Result<()> {
        instructions::publish_price(ctx, price, client_ts_ms)
    }
}
