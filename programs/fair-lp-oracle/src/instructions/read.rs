use anchor_lang::prelude::*;
use crate::engine;
use crate::errors::OracleError;
use crate::state::*;

/// Return the last cached fair price of a pool without recomputing it
pub fn read_cached(ctx: Context<ReadCached>) -> Result<u128> {
    let slot = FairPrice::load(&ctx.accounts.fair_price)?
        .ok_or(OracleError::NoCachedPrice)?;
    let record = engine::read_cached(&slot, ctx.accounts.lp_mint.key)?;

    msg!(
        "Cached fair price for {}: {} at {}",
        record.pool,
        record.price,
        record.computed_at
    );

    Ok(record.price)
}

#[derive(Accounts)]
pub struct ReadCached<'info> {
    /// CHECK: only the key is used, to locate the cache slot
    pub lp_mint: UncheckedAccount<'info>,

    /// CHECK: may not exist yet; decoded in the handler
    #[account(seeds = [FairPrice::SEED, lp_mint.key().as_ref()], bump)]
    pub fair_price: UncheckedAccount<'info>,
}
