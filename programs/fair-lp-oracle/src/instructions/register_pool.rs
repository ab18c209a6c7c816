use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::snapshot::read_pool_accounts;
use crate::state::*;

/// Bind a pool's LP mint to the vaults holding its reserves
pub fn register_pool(ctx: Context<RegisterPool>) -> Result<()> {
    ctx.accounts
        .config
        .require_authority(&ctx.accounts.authority.key())?;

    let snapshot = read_pool_accounts(
        &ctx.accounts.lp_mint,
        &ctx.accounts.vault0,
        &ctx.accounts.vault1,
        &ctx.accounts.mint0,
        &ctx.accounts.mint1,
    )?;

    let bump = *ctx.bumps.get("pool_vaults").ok_or(OracleError::BumpNotFound)?;
    let clock = Clock::get()?;
    let pool_vaults = &mut ctx.accounts.pool_vaults;
    pool_vaults.lp_mint = snapshot.pool;
    pool_vaults.vault0 = ctx.accounts.vault0.key();
    pool_vaults.vault1 = ctx.accounts.vault1.key();
    pool_vaults.updated_at = clock.unix_timestamp;
    pool_vaults.bump = bump;

    msg!(
        "Registered pool {}: {} / {}",
        snapshot.pool,
        snapshot.asset0,
        snapshot.asset1
    );

    emit!(PoolRegistered {
        lp_mint: snapshot.pool,
        vault0: pool_vaults.vault0,
        vault1: pool_vaults.vault1,
        slot: clock.slot,
    });

    Ok(())
}

#[event]
pub struct PoolRegistered {
    pub lp_mint: Pubkey,
    pub vault0: Pubkey,
    pub vault1: Pubkey,
    pub slot: u64,
}

#[derive(Accounts)]
pub struct RegisterPool<'info> {
    #[account(seeds = [OracleConfig::SEED], bump = config.bump)]
    pub config: Account<'info, OracleConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PoolVaults::SIZE,
        seeds = [PoolVaults::SEED, lp_mint.key().as_ref()],
        bump
    )]
    pub pool_vaults: Account<'info, PoolVaults>,

    /// CHECK: SPL mint of the LP token; decoded by the reserve reader
    pub lp_mint: UncheckedAccount<'info>,

    /// CHECK: pool vault holding asset 0; decoded by the reserve reader
    pub vault0: UncheckedAccount<'info>,

    /// CHECK: pool vault holding asset 1; decoded by the reserve reader
    pub vault1: UncheckedAccount<'info>,

    /// CHECK: SPL mint of asset 0; decoded by the reserve reader
    pub mint0: UncheckedAccount<'info>,

    /// CHECK: SPL mint of asset 1; decoded by the reserve reader
    pub mint1: UncheckedAccount<'info>,

    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
