use anchor_lang::prelude::*;

use crate::errors::OracleError;

/// Registry entry mapping an asset mint to its reference price source
#[account]
pub struct PriceSource {
    /// Asset mint this entry prices
    pub asset: Pubkey,
    /// Reference price source account (e.g. a `PriceFeed`)
    pub source: Pubkey,
    /// Timestamp of the last upsert
    pub updated_at: i64,
    /// PDA bump
    pub bump: u8,
}

impl PriceSource {
    pub const SIZE: usize = 32 + 32 + 8 + 1;
    pub const SEED: &'static [u8] = b"price_source";

    pub fn address(asset: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, asset.as_ref()], &crate::ID)
    }

    /// An entry that has never been written is still all zeroes.
    pub fn is_registered(&self) -> bool {
        self.source != Pubkey::default()
    }

    /// Points the entry at `source`, returning the previous source if the
    /// entry was already registered. The default key is reserved for "not
    /// registered" and is rejected.
    pub fn assign(
        &mut self,
        asset: Pubkey,
        source: Pubkey,
        now: i64,
        bump: u8,
    ) -> Result<Option<Pubkey>> {
        require_keys_neq!(source, Pubkey::default(), OracleError::InvalidPriceSource);
        let previous = self.is_registered().then_some(self.source);
        self.asset = asset;
        self.source = source;
        self.updated_at = now;
        self.bump = bump;
        Ok(previous)
    }
}
