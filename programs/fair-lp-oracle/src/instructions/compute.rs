use anchor_lang::prelude::*;
use crate::engine;
use crate::errors::OracleError;
use crate::feeds::FeedAccounts;
use crate::registry::AccountRegistry;
use crate::snapshot::TokenPoolReader;
use crate::state::*;

/// Compute the pool's fair LP token price and cache it.
///
/// Returns the price (18 decimals) as instruction return data. Any failure
/// aborts the transaction, so the cached record is only ever replaced by a
/// complete computation.
pub fn compute_and_cache(ctx: Context<ComputeAndCache>) -> Result<u128> {
    let clock = Clock::get()?;
    let bump = *ctx.bumps.get("fair_price").ok_or(OracleError::BumpNotFound)?;
    let accounts = &mut *ctx.accounts;

    let reader = TokenPoolReader {
        pool_vaults: &accounts.pool_vaults,
        lp_mint: &accounts.lp_mint,
        vault0: &accounts.vault0,
        vault1: &accounts.vault1,
        mint0: &accounts.mint0,
        mint1: &accounts.mint1,
    };
    let entries = [
        accounts.price_source0.to_account_info(),
        accounts.price_source1.to_account_info(),
    ];
    let feeds = [
        accounts.price_feed0.to_account_info(),
        accounts.price_feed1.to_account_info(),
    ];

    let fair_price = &mut accounts.fair_price;
    fair_price.bump = bump;
    let record = price_pool(
        &mut **fair_price,
        &reader,
        &entries,
        &feeds,
        accounts.config.max_staleness_secs,
        &clock,
    )?;

    msg!(
        "Fair price for {}: {} (#{})",
        record.pool,
        record.price,
        record.sequence
    );

    emit!(FairPriceComputed {
        pool: record.pool,
        price: record.price,
        computed_at: record.computed_at,
        slot: record.slot,
        sequence: record.sequence,
    });

    Ok(record.price)
}

/// Runs the engine over the instruction's accounts.
fn price_pool(
    cache: &mut FairPrice,
    reader: &TokenPoolReader,
    entries: &[AccountInfo],
    feeds: &[AccountInfo],
    max_staleness_secs: i64,
    clock: &Clock,
) -> Result<engine::FairPriceRecord> {
    engine::compute_and_cache(
        cache,
        reader,
        &AccountRegistry::new(entries),
        &FeedAccounts::new(feeds),
        max_staleness_secs,
        clock,
    )
}

#[event]
pub struct FairPriceComputed {
    pub pool: Pubkey,
    pub price: u128,
    pub computed_at: i64,
    pub slot: u64,
    pub sequence: u64,
}

#[derive(Accounts)]
pub struct ComputeAndCache<'info> {
    #[account(seeds = [OracleConfig::SEED], bump = config.bump)]
    pub config: Account<'info, OracleConfig>,

    /// CHECK: SPL mint of the LP token; decoded by the reserve reader
    pub lp_mint: UncheckedAccount<'info>,

    /// CHECK: vault binding of the pool, possibly unregistered; checked by the reserve reader
    #[account(seeds = [PoolVaults::SEED, lp_mint.key().as_ref()], bump)]
    pub pool_vaults: UncheckedAccount<'info>,

    /// CHECK: pool vault holding asset 0; decoded by the reserve reader
    pub vault0: UncheckedAccount<'info>,

    /// CHECK: pool vault holding asset 1; decoded by the reserve reader
    pub vault1: UncheckedAccount<'info>,

    /// CHECK: SPL mint of asset 0; decoded by the reserve reader
    pub mint0: UncheckedAccount<'info>,

    /// CHECK: SPL mint of asset 1; decoded by the reserve reader
    pub mint1: UncheckedAccount<'info>,

    /// CHECK: registry entry of asset 0, possibly uninitialized; checked on lookup
    pub price_source0: UncheckedAccount<'info>,

    /// CHECK: registry entry of asset 1, possibly uninitialized; checked on lookup
    pub price_source1: UncheckedAccount<'info>,

    /// CHECK: reference price source of asset 0; matched against the registry
    pub price_feed0: UncheckedAccount<'info>,

    /// CHECK: reference price source of asset 1; matched against the registry
    pub price_feed1: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + FairPrice::SIZE,
        seeds = [FairPrice::SEED, lp_mint.key().as_ref()],
        bump
    )]
    pub fair_price: Account<'info, FairPrice>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
