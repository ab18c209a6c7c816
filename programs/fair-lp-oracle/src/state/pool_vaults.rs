use anchor_lang::prelude::*;

/// Vaults the authority has bound to an LP mint; only these are read as the
/// pool's reserves
#[account]
pub struct PoolVaults {
    /// LP mint of the pool
    pub lp_mint: Pubkey,
    /// Token account holding asset 0
    pub vault0: Pubkey,
    /// Token account holding asset 1
    pub vault1: Pubkey,
    /// Timestamp of the last registration
    pub updated_at: i64,
    /// PDA bump
    pub bump: u8,
}

impl PoolVaults {
    pub const SIZE: usize = 32 + 32 + 32 + 8 + 1;
    pub const SEED: &'static [u8] = b"pool_vaults";

    pub fn address(lp_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED, lp_mint.as_ref()], &crate::ID)
    }

    /// Decodes a binding that may not have been registered yet.
    pub fn load(info: &AccountInfo) -> Option<PoolVaults> {
        if *info.owner != crate::ID || info.data_is_empty() {
            return None;
        }
        let data = info.try_borrow_data().ok()?;
        let mut slice: &[u8] = &data;
        PoolVaults::try_deserialize(&mut slice).ok()
    }

    pub fn binds(&self, lp_mint: &Pubkey, vault0: &Pubkey, vault1: &Pubkey) -> bool {
        self.lp_mint == *lp_mint && self.vault0 == *vault0 && self.vault1 == *vault1
    }
}
