use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::state::*;

/// Point `asset` at a reference price source, creating the entry if needed
pub fn upsert_price_source(
    ctx: Context<UpsertPriceSource>,
    asset: Pubkey,
    source: Pubkey,
) -> Result<()> {
    ctx.accounts
        .config
        .require_authority(&ctx.accounts.authority.key())?;

    let bump = *ctx.bumps.get("price_source").ok_or(OracleError::BumpNotFound)?;
    let clock = Clock::get()?;
    let previous = ctx
        .accounts
        .price_source
        .assign(asset, source, clock.unix_timestamp, bump)?;

    msg!("Price source for {}: {}", asset, source);

    emit!(PriceSourceUpserted {
        asset,
        source,
        previous,
        slot: clock.slot,
    });

    Ok(())
}

#[event]
pub struct PriceSourceUpserted {
    pub asset: Pubkey,
    pub source: Pubkey,
    pub previous: Option<Pubkey>,
    pub slot: u64,
}

#[derive(Accounts)]
#[instruction(asset: Pubkey)]
pub struct UpsertPriceSource<'info> {
    #[account(seeds = [OracleConfig::SEED], bump = config.bump)]
    pub config: Account<'info, OracleConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PriceSource::SIZE,
        seeds = [PriceSource::SEED, asset.as_ref()],
        bump
    )]
    pub price_source: Account<'info, PriceSource>,

    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
