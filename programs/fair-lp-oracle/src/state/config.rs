use anchor_lang::prelude::*;

use crate::errors::OracleError;

/// Global oracle configuration
#[account]
pub struct OracleConfig {
    /// Only key allowed to change the price source registry
    pub authority: Pubkey,
    /// Maximum age of a reference price in seconds (0 disables the check)
    pub max_staleness_secs: i64,
    /// PDA bump
    pub bump: u8,
}

impl OracleConfig {
    pub const SIZE: usize = 32 + 8 + 1;
    pub const SEED: &'static [u8] = b"config";
    pub const DEFAULT_MAX_STALENESS_SECS: i64 = 120;

    pub fn require_authority(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.authority, OracleError::Unauthorized);
        Ok(())
    }
}
