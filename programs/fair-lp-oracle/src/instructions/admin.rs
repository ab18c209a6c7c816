use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::state::*;

/// Create the oracle configuration (one-time setup)
pub fn initialize(
    ctx: Context<Initialize>,
    authority: Pubkey,
    max_staleness_secs: Option<i64>,
) -> Result<()> {
    let max_staleness_secs =
        max_staleness_secs.unwrap_or(OracleConfig::DEFAULT_MAX_STALENESS_SECS);
    require!(max_staleness_secs >= 0, OracleError::InvalidStaleness);

    let config = &mut ctx.accounts.config;
    config.authority = authority;
    config.max_staleness_secs = max_staleness_secs;
    config.bump = *ctx.bumps.get("config").ok_or(OracleError::BumpNotFound)?;

    msg!(
        "Initialized oracle: authority {} max staleness {}s",
        authority,
        max_staleness_secs
    );

    Ok(())
}

/// Hand the registry authority to a new key
pub fn set_authority(ctx: Context<UpdateConfig>, new_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.require_authority(&ctx.accounts.authority.key())?;

    let previous = config.authority;
    config.authority = new_authority;

    emit!(AuthorityChanged {
        previous,
        authority: new_authority,
        slot: Clock::get()?.slot,
    });

    Ok(())
}

/// Change how old a reference price may be (0 disables the check)
pub fn set_max_staleness(ctx: Context<UpdateConfig>, max_staleness_secs: i64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.require_authority(&ctx.accounts.authority.key())?;
    require!(max_staleness_secs >= 0, OracleError::InvalidStaleness);

    config.max_staleness_secs = max_staleness_secs;

    emit!(StalenessUpdated {
        max_staleness_secs,
        slot: Clock::get()?.slot,
    });

    Ok(())
}

#[event]
pub struct AuthorityChanged {
    pub previous: Pubkey,
    pub authority: Pubkey,
    pub slot: u64,
}

#[event]
pub struct StalenessUpdated {
    pub max_staleness_secs: i64,
    pub slot: u64,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + OracleConfig::SIZE,
        seeds = [OracleConfig::SEED],
        bump
    )]
    pub config: Account<'info, OracleConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut, seeds = [OracleConfig::SEED], bump = config.bump)]
    pub config: Account<'info, OracleConfig>,

    pub authority: Signer<'info>,
}
