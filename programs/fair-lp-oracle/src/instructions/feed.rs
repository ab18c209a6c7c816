use anchor_lang::prelude::*;
use crate::errors::OracleError;
use crate::state::*;

/// Create a push price feed owned by the signing updater
pub fn create_price_feed(ctx: Context<CreatePriceFeed>, label: String, decimals: u8) -> Result<()> {
    require!(decimals <= PriceFeed::MAX_DECIMALS, OracleError::InvalidDecimals);

    let feed = &mut ctx.accounts.price_feed;
    feed.authority = ctx.accounts.authority.key();
    feed.label = PriceFeed::encode_label(&label)?;
    feed.decimals = decimals;
    feed.price = 0;
    feed.published_at = 0;
    feed.published_slot = 0;
    feed.client_ts_ms = 0;
    feed.bump = *ctx.bumps.get("price_feed").ok_or(OracleError::BumpNotFound)?;

    msg!("Created price feed: {} ({})", feed.label_as_string(), feed.key());

    Ok(())
}

/// Publish a new price to a feed
pub fn publish_price(ctx: Context<PublishPrice>, price: i64, client_ts_ms: i64) -> Result<()> {
    let feed = &mut ctx.accounts.price_feed;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        feed.authority,
        OracleError::UnauthorizedUpdater
    );

    let clock = Clock::get()?;
    feed.publish(price, client_ts_ms, clock.unix_timestamp, clock.slot)?;

    emit!(PricePublished {
        feed: feed.key(),
        price,
        decimals: feed.decimals,
        client_ts_ms,
        slot: clock.slot,
    });

    Ok(())
}

#[event]
pub struct PricePublished {
    pub feed: Pubkey,
    pub price: i64,
    pub decimals: u8,
    pub client_ts_ms: i64,
    pub slot: u64,
}

#[derive(Accounts)]
#[instruction(label: String)]
pub struct CreatePriceFeed<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + PriceFeed::SIZE,
        seeds = [
            PriceFeed::SEED,
            authority.key().as_ref(),
            PriceFeed::padded_label(&label).as_ref()
        ],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct PublishPrice<'info> {
    #[account(
        mut,
        seeds = [PriceFeed::SEED, price_feed.authority.as_ref(), price_feed.label.as_ref()],
        bump = price_feed.bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub authority: Signer<'info>,
}
